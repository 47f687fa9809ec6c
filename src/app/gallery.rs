//! The example plots shown by the demo, one builder per tab.

use rand::Rng;
use serde_json::json;

use crate::app::types::Tab;
use crate::engine::{Args, PlotError, SharedRegistry};
use crate::plot::Plot;
use crate::ui::widgets::plot::PlotView;

const PIZZAS: [&str; 6] = ["Sausage", "Pepperoni", "Mushrooms", "Cheese", "Chicken", "Beef"];
const MALE_PERCENTAGES: [f64; 6] = [14.0, 36.0, 11.0, 8.0, 7.0, 4.0];
const FEMALE_PERCENTAGES: [f64; 6] = [12.0, 20.0, 35.0, 15.0, 2.0, 1.0];

/// One titled plot on a gallery tab.
pub struct Panel {
    pub title: &'static str,
    pub view: PlotView,
}

fn panel(
    registry: &SharedRegistry,
    title: &'static str,
    setup: impl FnOnce(&mut Plot) -> Result<(), PlotError>,
) -> Result<Panel, PlotError> {
    let mut view = PlotView::new(registry.clone());
    setup(view.plt())?;
    Ok(Panel { title, view })
}

/// Build the panels of `tab`.
pub fn build(tab: Tab, registry: &SharedRegistry) -> Result<Vec<Panel>, PlotError> {
    match tab {
        Tab::Basic => basic(registry),
        Tab::Bars => bars(registry),
        Tab::Special => special(registry),
    }
}

fn basic(registry: &SharedRegistry) -> Result<Vec<Panel>, PlotError> {
    let wave = Plot::sin(2.0, 200, 1.0, 0.0, 0.0);
    Ok(vec![
        panel(registry, "Scatter", |plt| {
            plt.call("scatter", Args::new().arg(wave.clone()))?
                .call("title", Args::new().arg("Scatter Plot"))?;
            Ok(())
        })?,
        panel(registry, "Line", |plt| {
            plt.call("plot", Args::new().arg(wave.clone()))?
                .call("title", Args::new().arg("Line Plot"))?;
            Ok(())
        })?,
        panel(registry, "Logarithmic", |plt| {
            plt.call("plot", Args::new().arg(Plot::sin(2.0, 10_000, 1.0, 0.0, 0.0)))?
                .call("xscale", Args::new().arg("log"))?
                .call("yscale", Args::new().arg("linear"))?
                .call("grid", Args::new().arg(0).arg(1))?
                .call("title", Args::new().arg("Logarithmic Plot"))?
                .call("xlabel", Args::new().arg("logarithmic scale"))?
                .call("ylabel", Args::new().arg("linear scale"))?;
            Ok(())
        })?,
        panel(registry, "Multiple data sets", |plt| {
            plt.call("plot", Args::new().arg(wave.clone()).kw("label", "plot"))?
                .call(
                    "scatter",
                    Args::new()
                        .arg(Plot::sin(2.0, 200, 1.0, -1.0, 0.0))
                        .kw("label", "scatter"),
                )?
                .call("title", Args::new().arg("Multiple Data Set"))?;
            Ok(())
        })?,
    ])
}

/// Normally distributed samples via the Box-Muller transform.
fn gauss(rng: &mut impl Rng, mean: f64, deviation: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| {
            let u1: f64 = rng.random_range(f64::EPSILON..1.0);
            let u2: f64 = rng.random();
            mean + deviation * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
        })
        .collect()
}

fn bars(registry: &SharedRegistry) -> Result<Vec<Panel>, PlotError> {
    let mut rng = rand::rng();
    Ok(vec![
        panel(registry, "Vertical bars", |plt| {
            plt.call("bar", Args::new().arg(json!(PIZZAS)).arg(json!(MALE_PERCENTAGES)))?
                .call("title", Args::new().arg("Most Favored Pizzas in the World"))?;
            Ok(())
        })?,
        panel(registry, "Horizontal bars", |plt| {
            plt.call(
                "bar",
                Args::new()
                    .arg(json!(PIZZAS))
                    .arg(json!(MALE_PERCENTAGES))
                    .kw("orientation", "horizontal"),
            )?
            .call("title", Args::new().arg("Most Favoured Pizzas in the World"))?;
            Ok(())
        })?,
        panel(registry, "Multiple bars", |plt| {
            plt.call(
                "multiple_bar",
                Args::new()
                    .arg(json!(PIZZAS))
                    .arg(json!([MALE_PERCENTAGES, FEMALE_PERCENTAGES]))
                    .kw("labels", json!(["men", "women"])),
            )?
            .call("title", Args::new().arg("Most Favored Pizzas in the World by Gender"))?;
            Ok(())
        })?,
        panel(registry, "Histogram", |plt| {
            let samples = [(0.0, 10_000, "mean 0"), (3.0, 6_000, "mean 3"), (6.0, 4_000, "mean 6")];
            for (mean, count, label) in samples {
                plt.push(
                    "hist",
                    Args::new()
                        .arg(gauss(&mut rng, mean, 1.0, count))
                        .arg(60)
                        .kw("label", label),
                )?;
            }
            plt.call("title", Args::new().arg("Histogram Plot"))?;
            Ok(())
        })?,
    ])
}

/// Distance-from-centre field used by the matrix example.
fn matrix(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    (r as f64 - rows as f64 / 2.0).abs() + (c as f64 - cols as f64 / 2.0).abs()
                })
                .collect()
        })
        .collect()
}

fn special(registry: &SharedRegistry) -> Result<Vec<Panel>, PlotError> {
    Ok(vec![
        panel(registry, STREAM_PANEL, |plt| {
            plt.call("title", Args::new().arg("Streaming Data"))?;
            Stream::default().plot(plt)
        })?,
        panel(registry, "Matrix", |plt| {
            plt.call("matrix_plot", Args::new().arg(json!(matrix(24, 80))))?
                .call("title", Args::new().arg("Matrix Plot"))?;
            Ok(())
        })?,
        panel(registry, "Extra lines", |plt| {
            plt.call("scatter", Args::new().arg(Plot::sin(2.0, 200, 1.0, 0.0, 0.0)))?
                .call("title", Args::new().arg("Extra Lines"))?
                .call("vline", Args::new().arg(100).arg("magenta"))?
                .call("hline", Args::new().arg(0.5).arg("blue+"))?;
            Ok(())
        })?,
    ])
}

/// Title of the panel the stream redraws.
pub const STREAM_PANEL: &str = "Streaming";

/// A sine wave that moves one frame per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stream {
    pub frame: u64,
}

impl Stream {
    pub fn advance(&mut self) {
        self.frame += 1;
    }

    /// Replace the plotted data with the current frame.
    pub fn plot(&self, plt: &mut Plot) -> Result<(), PlotError> {
        let phase = 2.0 * self.frame as f64 / 50.0;
        plt.clear_data();
        plt.call("scatter", Args::new().arg(Plot::sin(2.0, 1_000, 1.0, phase, 0.0)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ThemeRegistry;

    #[test]
    fn every_tab_has_panels() {
        let registry = ThemeRegistry::with_builtins().shared();
        for tab in Tab::ALL {
            assert!(!build(tab, &registry).unwrap().is_empty());
        }
    }

    #[test]
    fn stream_keeps_one_data_call() {
        let registry = ThemeRegistry::with_builtins().shared();
        let mut p = panel(&registry, STREAM_PANEL, |plt| {
            plt.call("title", Args::new().arg("s"))?;
            Ok(())
        })
        .unwrap();
        let mut stream = Stream::default();
        for _ in 0..3 {
            stream.advance();
            stream.plot(p.view.plt()).unwrap();
        }
        assert_eq!(p.view.plt().script().len(), 2);
    }
}
