use crate::core::models::series::ServiceSeries;

/// Order services by most-recent-day cost, descending. The sort is stable,
/// so services tied on yesterday's cost keep their encounter order.
pub fn rank(mut series: Vec<ServiceSeries>) -> Vec<ServiceSeries> {
    series.sort_by(|a, b| b.last_day().total_cmp(&a.last_day()));
    series
}

/// Split a ranked list into the first `top_n` entries and the remainder.
pub fn split(
    ranked: Vec<ServiceSeries>,
    top_n: usize,
) -> (Vec<ServiceSeries>, Vec<ServiceSeries>) {
    let cut = top_n.min(ranked.len());
    let mut top = ranked;
    let remainder = top.split_off(cut);
    (top, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, costs: &[f64]) -> ServiceSeries {
        ServiceSeries::new(name, costs.to_vec())
    }

    #[test]
    fn ranks_by_last_day_descending() {
        let ranked = rank(vec![
            series("cheap", &[9.0, 1.0]),
            series("pricey", &[0.0, 8.0]),
            series("middling", &[5.0, 5.0]),
        ]);
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["pricey", "middling", "cheap"]);
    }

    #[test]
    fn rank_is_non_increasing() {
        let ranked = rank(vec![
            series("a", &[3.0]),
            series("b", &[7.0]),
            series("c", &[7.0]),
            series("d", &[0.0]),
        ]);
        for pair in ranked.windows(2) {
            assert!(pair[0].last_day() >= pair[1].last_day());
        }
    }

    #[test]
    fn ties_keep_encounter_order() {
        let ranked = rank(vec![
            series("first", &[2.0]),
            series("second", &[2.0]),
            series("third", &[2.0]),
        ]);
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn split_takes_top_n() {
        let ranked = vec![series("a", &[3.0]), series("b", &[2.0]), series("c", &[1.0])];
        let (top, rest) = split(ranked, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "c");
    }

    #[test]
    fn split_zero_leaves_everything_in_remainder() {
        let ranked = vec![series("a", &[3.0]), series("b", &[2.0])];
        let (top, rest) = split(ranked, 0);
        assert!(top.is_empty());
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn split_beyond_len_leaves_empty_remainder() {
        let ranked = vec![series("a", &[3.0])];
        let (top, rest) = split(ranked, 10);
        assert_eq!(top.len(), 1);
        assert!(rest.is_empty());
    }
}
