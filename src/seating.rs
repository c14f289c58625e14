//! Synthetic seat maps and the seat selection state machine.
//!
//! There is no seat inventory behind the storefront: every time the seat
//! dialog opens a fresh grid is generated with random availability.

use rand::Rng;

/// Row letters; grids never have more rows than this
pub const ROW_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Probability threshold: a seat is available when its draw exceeds this
const OCCUPIED_THRESHOLD: f64 = 0.3;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Price band, decided solely by the row index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatCategory {
    Vip,
    Premium,
    Standard,
}

impl SeatCategory {
    pub fn for_row(row: usize) -> Self {
        match row {
            0..=2 => Self::Vip,
            3..=5 => Self::Premium,
            _ => Self::Standard,
        }
    }

    /// Seat price in TRY
    pub fn price(&self) -> u32 {
        match self {
            Self::Vip => 500,
            Self::Premium => 300,
            Self::Standard => 200,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vip => "VIP",
            Self::Premium => "Premium",
            Self::Standard => "Standart",
        }
    }

    /// CSS modifier used by the seat map
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Vip => "seat-vip",
            Self::Premium => "seat-premium",
            Self::Standard => "seat-standard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    /// Row letter followed by the 1-based seat number, e.g. `C12`
    pub id: String,
    pub row: char,
    pub number: u32,
    pub available: bool,
    pub selected: bool,
    pub price: u32,
    pub category: SeatCategory,
}

/// Generate a `rows × seats_per_row` grid, row-major.
///
/// Rows beyond `Z` are clamped away.
pub fn generate_seat_map<R: RandomSource + ?Sized>(
    rows: usize,
    seats_per_row: u32,
    rng: &mut R,
) -> Vec<Seat> {
    let rows = rows.min(ROW_LETTERS.len());
    let mut seats = Vec::with_capacity(rows * seats_per_row as usize);

    for (row_index, row) in ROW_LETTERS.chars().take(rows).enumerate() {
        let category = SeatCategory::for_row(row_index);
        for number in 1..=seats_per_row {
            seats.push(Seat {
                id: format!("{}{}", row, number),
                row,
                number,
                available: rng.next_f64() > OCCUPIED_THRESHOLD,
                selected: false,
                price: category.price(),
                category,
            });
        }
    }

    seats
}

/// One seat dialog session: the grid plus the ordered selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatSelection {
    seats: Vec<Seat>,
    selected: Vec<Seat>,
}

impl SeatSelection {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self {
            seats,
            selected: Vec::new(),
        }
    }

    /// Fresh selection over a newly generated grid
    pub fn generate<R: RandomSource + ?Sized>(
        rows: usize,
        seats_per_row: u32,
        rng: &mut R,
    ) -> Self {
        Self::new(generate_seat_map(rows, seats_per_row, rng))
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Selected seats in the order they were picked
    pub fn selected(&self) -> &[Seat] {
        &self.selected
    }

    /// Flip a seat between selected and unselected.
    ///
    /// Returns false (and changes nothing) when the seat is unknown or
    /// unavailable.
    pub fn toggle(&mut self, seat_id: &str) -> bool {
        let Some(seat) = self
            .seats
            .iter_mut()
            .find(|s| s.id == seat_id && s.available)
        else {
            return false;
        };

        seat.selected = !seat.selected;
        if seat.selected {
            self.selected.push(seat.clone());
        } else {
            self.selected.retain(|s| s.id != seat_id);
        }
        true
    }

    pub fn total_price(&self) -> u32 {
        self.selected.iter().map(|s| s.price).sum()
    }

    pub fn can_confirm(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Hand out the selection and reset it
    pub fn confirm(&mut self) -> Vec<Seat> {
        for seat in &mut self.seats {
            seat.selected = false;
        }
        std::mem::take(&mut self.selected)
    }

    /// Drop the selection without emitting anything
    pub fn cancel(&mut self) {
        for seat in &mut self.seats {
            seat.selected = false;
        }
        self.selected.clear();
    }

    /// Seats grouped by row, in row order
    pub fn rows(&self) -> Vec<(char, Vec<&Seat>)> {
        let mut rows: Vec<(char, Vec<&Seat>)> = Vec::new();
        for seat in &self.seats {
            match rows.last_mut() {
                Some((row, seats)) if *row == seat.row => seats.push(seat),
                _ => rows.push((seat.row, vec![seat])),
            }
        }
        rows
    }

    /// Seats that can still be picked (available and not yet selected)
    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| s.available && !s.selected).count()
    }
}

/// Comma-separated seat ids, e.g. `A1, A2`
pub fn seat_labels(seats: &[Seat]) -> String {
    seats
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Cycles through fixed draws
    struct Draws(Vec<f64>, usize);

    impl RandomSource for Draws {
        fn next_f64(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    fn all_available() -> Draws {
        Draws(vec![0.99], 0)
    }

    #[test]
    fn test_grid_shape_and_prices() {
        let mut rng = StdRng::seed_from_u64(7);
        let seats = generate_seat_map(10, 12, &mut rng);
        assert_eq!(seats.len(), 120);
        for seat in &seats {
            let row = ROW_LETTERS.find(seat.row).unwrap();
            let expected = if row < 3 {
                500
            } else if row < 6 {
                300
            } else {
                200
            };
            assert_eq!(seat.price, expected, "seat {}", seat.id);
            assert!(!seat.selected);
        }
        assert_eq!(seats[0].id, "A1");
        assert_eq!(seats[119].id, "J12");
    }

    #[test]
    fn test_availability_roughly_seventy_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let seats = generate_seat_map(20, 50, &mut rng);
        let available = seats.iter().filter(|s| s.available).count() as f64;
        let ratio = available / seats.len() as f64;
        assert!((0.6..0.8).contains(&ratio), "ratio {}", ratio);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut draws = Draws(vec![0.3, 0.30001], 0);
        let seats = generate_seat_map(1, 2, &mut draws);
        assert!(!seats[0].available);
        assert!(seats[1].available);
    }

    #[test]
    fn test_rows_clamped_to_alphabet() {
        let seats = generate_seat_map(40, 1, &mut all_available());
        assert_eq!(seats.len(), 26);
        assert_eq!(seats.last().unwrap().id, "Z1");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut sel = SeatSelection::generate(2, 3, &mut all_available());
        assert!(sel.toggle("A2"));
        assert_eq!(sel.selected().len(), 1);
        assert!(sel.seats()[1].selected);

        assert!(sel.toggle("A2"));
        assert!(sel.selected().is_empty());
        assert!(!sel.seats()[1].selected);
        assert!(!sel.can_confirm());
    }

    #[test]
    fn test_available_count_excludes_taken_and_selected() {
        // A1 and B1 taken, A2 and B2 open
        let mut sel = SeatSelection::generate(2, 2, &mut Draws(vec![0.1, 0.9], 0));
        assert_eq!(sel.available_count(), 2);
        sel.toggle("A2");
        assert_eq!(sel.available_count(), 1);
        sel.cancel();
        assert_eq!(sel.available_count(), 2);
    }

    #[test]
    fn test_unavailable_seat_is_noop() {
        let mut sel = SeatSelection::generate(1, 2, &mut Draws(vec![0.1, 0.9], 0));
        let before = sel.clone();
        assert!(!sel.toggle("A1"));
        assert_eq!(sel, before);
        assert!(!sel.toggle("Q9"));
    }

    #[test]
    fn test_total_is_sum_of_selected() {
        let mut sel = SeatSelection::generate(8, 2, &mut all_available());
        assert_eq!(sel.total_price(), 0);
        sel.toggle("A1"); // vip
        sel.toggle("D2"); // premium
        sel.toggle("H1"); // standard
        assert_eq!(sel.total_price(), 1000);
        assert_eq!(seat_labels(sel.selected()), "A1, D2, H1");
    }

    #[test]
    fn test_confirm_emits_and_resets() {
        let mut sel = SeatSelection::generate(1, 3, &mut all_available());
        sel.toggle("A3");
        sel.toggle("A1");
        let picked = sel.confirm();
        assert_eq!(
            picked.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["A3", "A1"]
        );
        assert!(sel.selected().is_empty());
        assert!(sel.seats().iter().all(|s| !s.selected));
    }

    #[test]
    fn test_cancel_discards() {
        let mut sel = SeatSelection::generate(1, 3, &mut all_available());
        sel.toggle("A1");
        sel.cancel();
        assert!(sel.selected().is_empty());
        assert_eq!(sel.total_price(), 0);
    }

    #[test]
    fn test_rows_grouping() {
        let sel = SeatSelection::generate(3, 4, &mut all_available());
        let rows = sel.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].0, 'C');
        assert_eq!(rows[2].1.len(), 4);
    }
}
