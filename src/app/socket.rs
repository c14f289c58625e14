//! Per-event live channel.
//!
//! `LiveSocket` turns browser WebSocket callbacks into a stream of
//! `SocketEvent`s so the owning component can drive it from a single async
//! task. Dropping the socket closes the connection, which is what happens
//! when the component unmounts and its task is cancelled. There is no
//! reconnection.

use eventticket_wire::ClientMessage;

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum SocketEvent {
    Open,
    Message(String),
    Error(String),
    Closed,
}

#[cfg(target_arch = "wasm32")]
pub use wasm::LiveSocket;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use futures::channel::mpsc::{unbounded, UnboundedReceiver};
    use futures::StreamExt;
    use wasm_bindgen::prelude::*;
    use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

    /// Keeps the JS callbacks alive for as long as the socket is
    struct Callbacks {
        _onopen: Closure<dyn FnMut()>,
        _onmessage: Closure<dyn FnMut(MessageEvent)>,
        _onerror: Closure<dyn FnMut(ErrorEvent)>,
        _onclose: Closure<dyn FnMut(CloseEvent)>,
    }

    pub struct LiveSocket {
        ws: WebSocket,
        events: UnboundedReceiver<SocketEvent>,
        _callbacks: Callbacks,
    }

    impl LiveSocket {
        pub fn connect(url: &str) -> Result<Self> {
            let ws = WebSocket::new(url).map_err(|e| StoreError::Socket(format!("{:?}", e)))?;
            let (tx, events) = unbounded();

            let open_tx = tx.clone();
            let onopen = Closure::<dyn FnMut()>::new(move || {
                let _ = open_tx.unbounded_send(SocketEvent::Open);
            });

            let message_tx = tx.clone();
            let onmessage = Closure::<dyn FnMut(_)>::new(move |e: MessageEvent| {
                // Binary frames are not part of the protocol
                if let Some(text) = e.data().as_string() {
                    let _ = message_tx.unbounded_send(SocketEvent::Message(text));
                }
            });

            let error_tx = tx.clone();
            let onerror = Closure::<dyn FnMut(_)>::new(move |e: ErrorEvent| {
                let _ = error_tx.unbounded_send(SocketEvent::Error(e.message()));
            });

            let close_tx = tx;
            let onclose = Closure::<dyn FnMut(_)>::new(move |e: CloseEvent| {
                tracing::debug!("Socket closed (code {})", e.code());
                let _ = close_tx.unbounded_send(SocketEvent::Closed);
            });

            ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
            ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
            ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

            Ok(Self {
                ws,
                events,
                _callbacks: Callbacks {
                    _onopen: onopen,
                    _onmessage: onmessage,
                    _onerror: onerror,
                    _onclose: onclose,
                },
            })
        }

        pub async fn next(&mut self) -> Option<SocketEvent> {
            self.events.next().await
        }

        pub fn send(&self, message: &ClientMessage) {
            let frame = match message.to_json() {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::warn!("Failed to encode {:?}: {}", message, e);
                    return;
                }
            };
            if let Err(e) = self.ws.send_with_str(&frame) {
                tracing::warn!("Failed to send {:?}: {:?}", message, e);
            }
        }
    }

    impl Drop for LiveSocket {
        fn drop(&mut self) {
            self.ws.set_onopen(None);
            self.ws.set_onmessage(None);
            self.ws.set_onerror(None);
            self.ws.set_onclose(None);
            let _ = self.ws.close();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::LiveSocket;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    /// The native host renders pages but never holds live connections
    pub struct LiveSocket;

    impl LiveSocket {
        pub fn connect(url: &str) -> Result<Self> {
            Err(StoreError::Socket(format!(
                "live updates are only available in the browser ({})",
                url
            )))
        }

        pub async fn next(&mut self) -> Option<SocketEvent> {
            None
        }

        pub fn send(&self, message: &ClientMessage) {
            tracing::debug!("Dropping {:?} on native host", message);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_connect_reports_socket_error() {
        let res = LiveSocket::connect("ws://localhost:8000/ws/event/1/");
        assert!(matches!(res, Err(StoreError::Socket(_))));
    }
}
