use crate::{
    baselines::Marker,
    data::Cohort,
    error::{ReportError, Result},
    metrics::Metric,
};
use color::{
    bold_font, regular_font, AXIS_DESC_FONT_SIZE, LEGEND_FONT_SIZE, MARKER_SIZE, STROKE_WIDTH,
    TICK_FONT_SIZE, TITLE_FONT_SIZE,
};
use log::{debug, error, info};
use plotters::prelude::*;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use ticks::{format_metric, format_thousands, x_axis_range, x_ticks, y_axis_range};

pub mod color;
pub mod ticks;

/// 14x7 inches at 100 DPI.
pub const CHART_SIZE_PX: (u32, u32) = (1400, 700);
pub const X_AXIS_DESC: &str = "Computing Nodes";

fn render_error(path: &Path, reason: impl fmt::Display) -> ReportError {
    let reason = reason.to_string();
    error!(
        "error rendering chart (path={}, reason={reason})",
        path.display()
    );
    ReportError::Render {
        path: path.to_path_buf(),
        reason,
    }
}

fn diamond(center: (i32, i32), size: i32) -> Vec<(i32, i32)> {
    let (x, y) = center;
    vec![(x, y - size), (x + size, y), (x, y + size), (x - size, y)]
}

/// Draw one line chart comparing `metric` for both cohorts, and write it as
/// a PNG image to `output_file`.
pub fn render_chart(
    metric: &Metric,
    inc_enabled: &Cohort,
    traditional: &Cohort,
    title: &str,
    y_label: &str,
    output_file: &Path,
) -> Result<()> {
    let ticks = x_ticks(inc_enabled, traditional)?;
    let (x_min, x_max) = match (ticks.first(), ticks.last()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => return Err(render_error(output_file, "no ticks for the x axis")),
    };

    let values: Vec<f64> = inc_enabled
        .rows
        .iter()
        .chain(traditional.rows.iter())
        .map(|row| metric.value(row))
        .collect();
    let x_range = x_axis_range(x_min, x_max);
    let y_range = y_axis_range(&values);
    debug!("{metric}: x_range={x_range:?}, y_range={y_range:?}, ticks={ticks:?}");

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let root = BitMapBackend::new(output_file, CHART_SIZE_PX).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| render_error(output_file, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, bold_font(TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(120)
        .build_cartesian_2d(
            (x_range.start..x_range.end)
                .log_scale()
                .with_key_points(ticks),
            y_range,
        )
        .map_err(|e| render_error(output_file, e))?;

    let x_label_formatter = |x: &f64| format_thousands(*x);
    let y_label_formatter = |y: &f64| format_metric(*y);
    chart
        .configure_mesh()
        .x_desc(X_AXIS_DESC)
        .y_desc(y_label)
        .axis_desc_style(bold_font(AXIS_DESC_FONT_SIZE))
        .x_label_style(regular_font(TICK_FONT_SIZE))
        .y_label_style(regular_font(TICK_FONT_SIZE))
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&y_label_formatter)
        .draw()
        .map_err(|e| render_error(output_file, e))?;

    for cohort in [inc_enabled, traditional] {
        let color = cohort
            .baseline
            .get_color()
            .map_err(|e| render_error(output_file, e))?;
        let points = cohort.points(metric);

        let series = chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(STROKE_WIDTH),
            ))
            .map_err(|e| render_error(output_file, e))?;
        series.label(cohort.baseline.to_string());

        match cohort.baseline.marker() {
            Marker::Circle => {
                series.legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled()));
                chart
                    .draw_series(points.iter().map(|point| {
                        EmptyElement::at(*point) + Circle::new((0, 0), MARKER_SIZE, color.filled())
                    }))
                    .map_err(|e| render_error(output_file, e))?;
            }
            Marker::Diamond => {
                series.legend(move |(x, y)| {
                    Polygon::new(diamond((x, y), MARKER_SIZE), color.filled())
                });
                chart
                    .draw_series(points.iter().map(|point| {
                        EmptyElement::at(*point)
                            + Polygon::new(diamond((0, 0), MARKER_SIZE), color.filled())
                    }))
                    .map_err(|e| render_error(output_file, e))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(regular_font(LEGEND_FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| render_error(output_file, e))?;

    root.present()
        .map_err(|e| render_error(output_file, e))?;
    info!("generated plot at: {}", output_file.display());

    Ok(())
}

/// Render one chart per metric into `results_dir`, returning the paths of
/// the written images.
pub fn plot_all(
    inc_enabled: &Cohort,
    traditional: &Cohort,
    results_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(results_dir).map_err(|source| {
        error!(
            "error creating results directory (path={}, error={source:?})",
            results_dir.display()
        );
        ReportError::Io {
            path: results_dir.to_path_buf(),
            source,
        }
    })?;

    let mut plot_paths = Vec::new();
    for metric in Metric::iter_variants() {
        let output_file = results_dir.join(metric.file_name());
        render_chart(
            metric,
            inc_enabled,
            traditional,
            metric.title(),
            metric.y_label(),
            &output_file,
        )?;
        plot_paths.push(output_file);
    }

    Ok(plot_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{baselines::Baseline, data::ResultRow};
    use std::fs;
    use tempfile::tempdir;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn row(comp_nodes: u64, inc: i64, timing_cost: f64) -> ResultRow {
        ResultRow {
            comp_nodes,
            inc: inc as f64,
            timing_cost,
            bandwidth_usage_msg: timing_cost * 10.0,
            bandwidth_usage_byte: timing_cost * 1000.0,
            compl_time_diff: timing_cost / 2.0,
            ports: None,
            total_ticks: None,
        }
    }

    #[test]
    fn diamond_is_centered() {
        assert_eq!(
            diamond((10, 20), 3),
            vec![(10, 17), (13, 20), (10, 23), (7, 20)]
        );
    }

    #[test]
    fn render_single_point_per_cohort() {
        let rows = [row(10, 1, 5.0), row(10, 0, 8.0)];
        let inc_enabled = Cohort {
            baseline: Baseline::IncEnabled,
            rows: vec![&rows[0]],
        };
        let traditional = Cohort {
            baseline: Baseline::Traditional,
            rows: vec![&rows[1]],
        };
        assert_eq!(inc_enabled.points(&Metric::TimingCost), vec![(10.0, 5.0)]);
        assert_eq!(traditional.points(&Metric::TimingCost), vec![(10.0, 8.0)]);

        let dir = tempdir().unwrap();
        let output_file = dir.path().join("nested").join("TimingCost.png");
        render_chart(
            &Metric::TimingCost,
            &inc_enabled,
            &traditional,
            Metric::TimingCost.title(),
            Metric::TimingCost.y_label(),
            &output_file,
        )
        .unwrap();

        let bytes = fs::read(&output_file).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn render_fails_on_empty_cohort() {
        let rows = [row(16, 1, 5.0)];
        let inc_enabled = Cohort {
            baseline: Baseline::IncEnabled,
            rows: vec![&rows[0]],
        };
        let traditional = Cohort {
            baseline: Baseline::Traditional,
            rows: vec![],
        };

        let dir = tempdir().unwrap();
        let output_file = dir.path().join("TimingCost.png");
        let result = render_chart(
            &Metric::TimingCost,
            &inc_enabled,
            &traditional,
            Metric::TimingCost.title(),
            Metric::TimingCost.y_label(),
            &output_file,
        );

        assert!(matches!(result, Err(ReportError::EmptyCohort(_))));
        assert!(!output_file.exists());
    }

    #[test]
    fn plot_all_writes_one_file_per_metric() {
        let rows = [
            row(16, 1, 30.0),
            row(128, 1, 55.0),
            row(1024, 1, 80.0),
            row(16, 0, 45.0),
            row(128, 0, 120.0),
            row(1024, 0, 410.0),
        ];
        let inc_enabled = Cohort {
            baseline: Baseline::IncEnabled,
            rows: rows.iter().filter(|r| r.inc == 1.0).collect(),
        };
        let traditional = Cohort {
            baseline: Baseline::Traditional,
            rows: rows.iter().filter(|r| r.inc == 0.0).collect(),
        };

        let dir = tempdir().unwrap();
        let results_dir = dir.path().join("results");
        let plot_paths = plot_all(&inc_enabled, &traditional, &results_dir).unwrap();

        let expected: Vec<PathBuf> = Metric::iter_variants()
            .map(|metric| results_dir.join(metric.file_name()))
            .collect();
        assert_eq!(plot_paths, expected);
        for path in &plot_paths {
            assert!(path.is_file(), "missing chart: {}", path.display());
        }
    }
}
