/// Sparkline glyph levels, lowest to highest. The full block is left out;
/// it renders inconsistently in chat clients.
const SPARKS: [char; 7] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇'];

/// Day-over-day change of the two most recent values, as a percentage.
///
/// Returns 0.0 unless both values are at least 1. The `>= 1` floor (not
/// `> 0`) keeps near-zero costs from producing huge or negative-skewed
/// percentages.
pub fn delta_percent(costs: &[f64]) -> f64 {
    if costs.len() > 1 {
        let last = costs[costs.len() - 1];
        let prev = costs[costs.len() - 2];
        if last >= 1.0 && prev >= 1.0 {
            return ((last / prev) - 1.0) * 100.0;
        }
    }
    0.0
}

/// Encode a series' relative shape as one glyph per value, scaled to the
/// series' own min/max. A flat series maps every value to the top glyph.
pub fn sparkline(costs: &[f64]) -> String {
    if costs.is_empty() {
        return String::new();
    }
    let lower = costs.iter().copied().fold(f64::INFINITY, f64::min);
    let upper = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = upper - lower;

    costs
        .iter()
        .map(|&value| {
            let scaled = if width == 0.0 { 1.0 } else { (value - lower) / width };
            let level = ((scaled * (SPARKS.len() - 1) as f64) as usize).min(SPARKS.len() - 1);
            SPARKS[level]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_of_empty_and_single_is_zero() {
        assert_eq!(delta_percent(&[]), 0.0);
        assert_eq!(delta_percent(&[42.0]), 0.0);
    }

    #[test]
    fn delta_guard_floors_at_one() {
        // second-to-last below 1 would blow the ratio up
        assert_eq!(delta_percent(&[0.5, 2.0]), 0.0);
        assert_eq!(delta_percent(&[2.0, 0.5]), 0.0);
        assert_eq!(delta_percent(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn delta_of_growth() {
        assert_eq!(delta_percent(&[2.0, 3.0]), 50.0);
    }

    #[test]
    fn delta_of_decline_is_negative() {
        assert_eq!(delta_percent(&[4.0, 2.0]), -50.0);
    }

    #[test]
    fn delta_only_looks_at_last_two_days() {
        assert_eq!(delta_percent(&[100.0, 0.0, 2.0, 3.0]), 50.0);
    }

    #[test]
    fn flat_series_repeats_the_top_glyph() {
        assert_eq!(sparkline(&[5.0, 5.0, 5.0]), "▇▇▇");
    }

    #[test]
    fn ascending_series_spans_all_levels() {
        assert_eq!(
            sparkline(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]),
            "▁▂▃▄▅▆▇"
        );
    }

    #[test]
    fn min_and_max_hit_the_extremes() {
        let line = sparkline(&[0.0, 100.0, 0.0]);
        assert_eq!(line, "▁▇▁");
    }

    #[test]
    fn output_length_matches_input() {
        let line = sparkline(&[3.0, 1.0, 4.0, 1.0, 5.0]);
        assert_eq!(line.chars().count(), 5);
    }

    #[test]
    fn empty_series_renders_empty() {
        assert_eq!(sparkline(&[]), "");
    }
}
