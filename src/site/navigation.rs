// src/site/navigation.rs
// =============================================================================
// Previous / current / next question ids for one page.
//
// The first page points "previous" at itself and the last page points "next"
// at itself. Every other neighbour id is the current issue number plus or
// minus one. The ids are NOT read from the neighbouring issues, so a gap in
// the issue numbers gives a link to a page that may not exist.
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub previous: u64,
    pub current: u64,
    pub next: u64,
}

impl Navigation {
    /// Navigation for the issue `current` at `index` among `total` issues
    pub fn for_position(current: u64, index: usize, total: usize) -> Self {
        let previous = if index > 0 {
            current.saturating_sub(1)
        } else {
            current
        };
        let next = if index + 1 < total {
            current.saturating_add(1)
        } else {
            current
        };

        Navigation {
            previous,
            current,
            next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_points_at_itself() {
        let nav = Navigation::for_position(5, 0, 1);
        assert_eq!(nav, Navigation { previous: 5, current: 5, next: 5 });
    }

    #[test]
    fn test_ends_and_interior() {
        let numbers = [10u64, 11, 12, 13];
        let navs: Vec<Navigation> = numbers
            .iter()
            .enumerate()
            .map(|(i, n)| Navigation::for_position(*n, i, numbers.len()))
            .collect();

        assert_eq!(navs[0].previous, 10);
        assert_eq!(navs[0].next, 11);
        assert_eq!(navs[1], Navigation { previous: 10, current: 11, next: 12 });
        assert_eq!(navs[2], Navigation { previous: 11, current: 12, next: 13 });
        assert_eq!(navs[3].previous, 12);
        assert_eq!(navs[3].next, 13);
    }

    #[test]
    fn test_gaps_use_arithmetic_not_neighbours() {
        // Issues 4, 9, 30: the middle page still links to 8 and 10
        let nav = Navigation::for_position(9, 1, 3);
        assert_eq!(nav, Navigation { previous: 8, current: 9, next: 10 });
    }

    #[test]
    fn test_extreme_numbers_do_not_overflow() {
        let nav = Navigation::for_position(u64::MAX, 0, 2);
        assert_eq!(nav, Navigation { previous: u64::MAX, current: u64::MAX, next: u64::MAX });

        let nav = Navigation::for_position(0, 1, 3);
        assert_eq!(nav, Navigation { previous: 0, current: 0, next: 1 });
    }
}
