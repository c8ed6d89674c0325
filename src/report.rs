//! Human-readable figure reports
//!
//! Writes per-figure summaries, the radius-doubling walkthrough, and area
//! comparisons into any [`fmt::Write`] sink. The output is meant for people,
//! not parsers; only [`Circle`]'s `Display` format is stable.

use crate::error::Result;
use crate::figures::{Circle, Figure, FigureType};
use std::cmp::Ordering;
use std::fmt;

/// Configuration for figure reports.
#[derive(Debug, Clone)]
pub struct ReportConfiguration {
    /// Number of decimals used for area, perimeter, ratio, radius and
    /// diameter.
    ///
    /// Default: `4`.
    pub precision: usize,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

/// Compare two figures by area.
pub fn compare_areas(a: &FigureType, b: &FigureType) -> Ordering {
    a.as_figure().area().total_cmp(&b.as_figure().area())
}

/// Report writer
#[derive(Debug, Clone, Default)]
pub struct FigureReport {
    config: ReportConfiguration,
}

impl FigureReport {
    pub fn new(config: ReportConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfiguration {
        &self.config
    }

    /// Write a summary of one figure
    pub fn write_figure<W: fmt::Write>(&self, w: &mut W, figure: &FigureType) -> Result<()> {
        let p = self.config.precision;
        let shape = figure.as_figure();

        writeln!(w, "INFO FOR: {figure}")?;
        writeln!(w, "Position: {}", shape.position())?;
        writeln!(w, "Area: {:.p$}", shape.area())?;
        writeln!(w, "Perimeter: {:.p$}", shape.perimeter())?;
        writeln!(w, "Area/perimeter ratio: {:.p$}", shape.area_perimeter_ratio())?;

        match figure {
            FigureType::Circle(circle) => {
                writeln!(w, "Radius: {:.p$}", circle.radius())?;
                writeln!(w, "Diameter: {:.p$}", circle.diameter())?;
            }
        }

        writeln!(w)?;
        Ok(())
    }

    /// Double a circle's radius, report the effect, then restore it.
    ///
    /// The figure is left as it was on return.
    pub fn write_radius_doubling<W: fmt::Write>(
        &self,
        w: &mut W,
        figure: &mut FigureType,
    ) -> Result<()> {
        writeln!(w, "=== RADIUS DOUBLING ===")?;

        match figure.as_circle_mut() {
            Some(circle) => {
                writeln!(w, "The figure is a circle.")?;
                self.write_doubled(w, circle)?;
            }
            None => writeln!(w, "The figure is not a circle.")?,
        }

        writeln!(w)?;
        Ok(())
    }

    fn write_doubled<W: fmt::Write>(&self, w: &mut W, circle: &mut Circle) -> Result<()> {
        let p = self.config.precision;
        let original = circle.radius();
        writeln!(w, "Original radius: {original:.2}")?;

        circle.set_radius(original * 2.0)?;
        writeln!(w, "New radius: {:.2}", circle.radius())?;
        writeln!(w, "New area: {:.p$} (factor 4)", circle.area())?;
        writeln!(w, "New perimeter: {:.p$} (factor 2)", circle.perimeter())?;

        circle.set_radius(original)?;
        Ok(())
    }

    /// Write both figures and which one has the larger area
    pub fn write_comparison<W: fmt::Write>(
        &self,
        w: &mut W,
        first: &FigureType,
        second: &FigureType,
    ) -> Result<()> {
        let p = self.config.precision;
        let (a1, a2) = (first.as_figure().area(), second.as_figure().area());

        writeln!(w, "=== FIGURE COMPARISON ===")?;
        writeln!(w, "Figure 1: {first}")?;
        writeln!(w, "Figure 2: {second}")?;

        match compare_areas(first, second) {
            Ordering::Greater => {
                writeln!(w, "Figure 1 has the larger area ({a1:.p$} > {a2:.p$})")?
            }
            Ordering::Less => writeln!(w, "Figure 2 has the larger area ({a2:.p$} > {a1:.p$})")?,
            Ordering::Equal => writeln!(w, "Both figures have the same area")?,
        }

        writeln!(w)?;
        Ok(())
    }
}
