
use crate::error::{Result, SynonymError};

use std::fmt::Display;
use std::path::Path;
use plotters::prelude::*;
use serde::Serialize;


/// Accuracy of one similarity metric over a question set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccuracyReport {
    pub metric: String,
    pub accuracy: f64,
}

impl AccuracyReport {
    pub fn new(metric: &str, accuracy: f64) -> Self {
        Self { metric: metric.to_string(), accuracy }
    }
}

impl Display for AccuracyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.2}%", self.metric, self.accuracy)
    }
}

/// The best scoring report, the first one on ties.
pub fn best(reports: &[AccuracyReport]) -> Option<&AccuracyReport> {
    let mut best: Option<&AccuracyReport> = None;
    for report in reports {
        if best.map_or(true, |b| report.accuracy > b.accuracy) {
            best = Some(report);
        }
    }
    best
}

fn plot_error<E: Display>(e: E) -> SynonymError {
    SynonymError::Plot(e.to_string())
}

/// Draws one bar per metric, accuracy on a fixed 0 to 100 axis.
pub fn draw_bar_chart(reports: &[AccuracyReport], save_to: &Path) -> Result<()> {

    const MARGIN: u32 = 15;
    const FONT_STYLE: (&str, i32) = ("sans-serif", 20);

    if reports.is_empty() {
        return Err(SynonymError::Plot("no results to draw".to_string()));
    }

    let labels: Vec<&str> = reports.iter().map(|r| r.metric.as_str()).collect();
    let root_area = BitMapBackend::new(save_to, (640, 480)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root_area)
    .caption("Performance Given by Different Similarity Functions", FONT_STYLE)
    .margin(MARGIN)
    .x_label_area_size(40)
    .y_label_area_size(50)
    .build_cartesian_2d((0..reports.len()).into_segmented(), 0f64..100f64)
    .map_err(plot_error)?;

    // a closure naming each bar by its metric
    let label_of = |x: &SegmentValue<usize>| match x {
        SegmentValue::CenterOf(i) => labels.get(*i).map(|l| l.to_string()).unwrap_or_default(),
        _ => String::new()
    };

    chart
    .configure_mesh()
    .disable_x_mesh()
    .y_desc("Score (%)")
    .x_label_formatter(&label_of)
    .draw()
    .map_err(plot_error)?;

    chart
    .draw_series(
        Histogram::vertical(&chart)
        .style(BLUE.mix(0.7).filled())
        .margin(20)
        .data(reports.iter().enumerate().map(|(i, r)| (i, r.accuracy)))
    )
    .map_err(plot_error)?;

    root_area.present().map_err(plot_error)?;
    Ok(())
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn reports_serialize_as_metric_and_accuracy() {

        let reports = vec![AccuracyReport::new("cosine", 67.5), AccuracyReport::new("euclidean", 35.0)];
        let value = serde_json::to_value(&reports).unwrap();
        assert_eq!(value, serde_json::json!([
            {"metric": "cosine", "accuracy": 67.5},
            {"metric": "euclidean", "accuracy": 35.0}
        ]));
        assert_eq!(reports[0].to_string(), "cosine: 67.50%");
    }

    #[test]
    fn best_prefers_first_on_ties() {

        let reports = vec![
            AccuracyReport::new("cosine", 67.5),
            AccuracyReport::new("euclidean", 35.0),
            AccuracyReport::new("norm_euclidean", 67.5),
        ];
        assert_eq!(best(&reports).unwrap().metric, "cosine");
        assert!(best(&[]).is_none());
    }

    #[test]
    fn empty_chart_is_an_error() {

        let dir = tempfile::tempdir().unwrap();
        let result = draw_bar_chart(&[], &dir.path().join("results.png"));
        assert!(matches!(result, Err(SynonymError::Plot(_))));
    }
}
