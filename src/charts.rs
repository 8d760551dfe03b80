//! Pure shaping of label→number records into colored chart segments.
//!
//! No aggregation happens here; values arrive already aggregated. Input is
//! never mutated, and an empty or all-zero record yields an empty segment
//! list so the panels render an empty chart instead of erroring.

use egui::Color32;

/// Neutral gray used for labels without a dedicated color.
pub const FALLBACK_COLOR: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

/// One slice or bar ready for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    /// Share of the chart in `[0, 1]`: of the total for pies, of the scale
    /// maximum for bars.
    pub fraction: f32,
    pub color: Color32,
}

/// Fixed color keying for sentiment and churn labels, case-insensitive.
pub fn color_for_label(label: &str) -> Color32 {
    match label.to_ascii_uppercase().as_str() {
        "POSITIVE" | "LOW" => Color32::from_rgb(0x27, 0xc9, 0x3f),
        "NEGATIVE" | "HIGH" => Color32::from_rgb(0xff, 0x4c, 0x4c),
        "MIXED" | "MEDIUM" => Color32::from_rgb(0xff, 0xbd, 0x2e),
        "NEUTRAL" => FALLBACK_COLOR,
        _ => FALLBACK_COLOR,
    }
}

/// Shape a record into pie slices carrying fractions of the total.
///
/// Non-positive entries are dropped; a record with no positive value yields
/// no slices.
pub fn pie_segments(data: &[(String, f64)]) -> Vec<ChartSegment> {
    let total: f64 = data.iter().map(|(_, value)| value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    data.iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(label, value)| ChartSegment {
            label: label.clone(),
            value: *value,
            fraction: (*value / total) as f32,
            color: color_for_label(label),
        })
        .collect()
}

/// Shape a record into bars scaled against `scale_max`.
///
/// A non-positive `scale_max` auto-scales against the record's own maximum;
/// zero-valued entries are kept so every category renders an axis label.
pub fn bar_segments(data: &[(String, f64)], scale_max: f64) -> Vec<ChartSegment> {
    let max = if scale_max > 0.0 {
        scale_max
    } else {
        data.iter().map(|(_, value)| *value).fold(0.0, f64::max)
    };
    data.iter()
        .map(|(label, value)| ChartSegment {
            label: label.clone(),
            value: *value,
            fraction: if max > 0.0 {
                ((*value / max).clamp(0.0, 1.0)) as f32
            } else {
                0.0
            },
            color: color_for_label(label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, f64)]) -> Vec<(String, f64)> {
        entries
            .iter()
            .map(|(label, value)| (label.to_string(), *value))
            .collect()
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let data = record(&[("POSITIVE", 120.0), ("NEGATIVE", 30.0), ("NEUTRAL", 40.0), ("MIXED", 10.0)]);
        let segments = pie_segments(&data);
        assert_eq!(segments.len(), 4);
        let total: f32 = segments.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!((segments[1].fraction - 0.15).abs() < 1e-6);
    }

    #[test]
    fn pie_drops_zero_slices_and_tolerates_empty_records() {
        let data = record(&[("POSITIVE", 0.0), ("NEGATIVE", 5.0)]);
        let segments = pie_segments(&data);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "NEGATIVE");

        assert!(pie_segments(&[]).is_empty());
        assert!(pie_segments(&record(&[("POSITIVE", 0.0)])).is_empty());
    }

    #[test]
    fn bars_keep_zero_entries() {
        let data = record(&[("HIGH", 18.0), ("MEDIUM", 0.0), ("LOW", 128.0)]);
        let segments = bar_segments(&data, 0.0);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].fraction, 0.0);
        assert!((segments[2].fraction - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bars_with_explicit_unit_scale() {
        let data = record(&[("Positive", 0.72), ("Negative", 0.11)]);
        let segments = bar_segments(&data, 1.0);
        assert!((segments[0].fraction - 0.72).abs() < 1e-6);
    }

    #[test]
    fn all_zero_bars_render_flat_not_nan() {
        let data = record(&[("HIGH", 0.0), ("LOW", 0.0)]);
        let segments = bar_segments(&data, 0.0);
        assert!(segments.iter().all(|s| s.fraction == 0.0));
    }

    #[test]
    fn unknown_labels_fall_back_to_gray() {
        assert_eq!(color_for_label("SARCASTIC"), FALLBACK_COLOR);
        assert_eq!(color_for_label("positive"), color_for_label("POSITIVE"));
        let data = record(&[("SARCASTIC", 3.0)]);
        assert_eq!(pie_segments(&data)[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn shaping_does_not_mutate_input() {
        let data = record(&[("POSITIVE", 1.0)]);
        let before = data.clone();
        let _ = pie_segments(&data);
        let _ = bar_segments(&data, 0.0);
        assert_eq!(data, before);
    }
}
