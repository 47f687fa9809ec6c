//! Recording facade over the engine.
//!
//! A [`Plot`] never draws when an operation is called. It records the call
//! and its arguments in a script, and [`Plot::build`] replays that script
//! into a fresh figure, so the same plot can be rendered again at any size
//! or theme. Safe functions (`sin`, `square`, `colorize`, `uncolorize`,
//! `transpose`) run immediately and are never recorded.

mod recorder;

pub use recorder::RecordedCall;

use serde_json::Value;
use tracing::debug;

use crate::engine::ops::{self, OpKind, SafeFn};
use crate::engine::{utility, Args, Figure, PlotColor, PlotError, ThemeRegistry};

/// What a name resolves to on a [`Plot`].
#[derive(Debug)]
pub enum Member<'a> {
    /// A safe function; call it directly.
    Immediate(SafeFn),
    /// The script entry for a draw operation.
    Recorded(&'a mut RecordedCall),
}

#[derive(Debug, Default)]
pub struct Plot {
    script: Vec<RecordedCall>,
    figure: Figure,
    size: Option<(u16, u16)>,
    theme: Option<String>,
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` to either a safe function or its recorded call.
    pub fn member(&mut self, name: &str) -> Result<Member<'_>, PlotError> {
        if let Some(f) = ops::safe_function(name) {
            return Ok(Member::Immediate(f));
        }
        self.op(name).map(Member::Recorded)
    }

    fn resolve(name: &str) -> Result<&'static ops::Operation, PlotError> {
        if ops::is_safe(name) {
            return Err(PlotError::NotRecordable(name.to_string()));
        }
        ops::lookup(name)
    }

    /// The script entry for `name`, appended on first use and reused after.
    pub fn op(&mut self, name: &str) -> Result<&mut RecordedCall, PlotError> {
        let op = Self::resolve(name)?;
        let index = match self.script.iter().rposition(|c| c.name() == op.name) {
            Some(index) => index,
            None => {
                self.script.push(RecordedCall::new(op));
                self.script.len() - 1
            }
        };
        Ok(&mut self.script[index])
    }

    /// A new script entry for `name`, even if one exists already.
    pub fn layer(&mut self, name: &str) -> Result<&mut RecordedCall, PlotError> {
        let op = Self::resolve(name)?;
        self.script.push(RecordedCall::new(op));
        let last = self.script.len() - 1;
        Ok(&mut self.script[last])
    }

    /// Record `name(args)`, replacing an earlier call of the same name.
    pub fn call(&mut self, name: &str, args: Args) -> Result<&mut Self, PlotError> {
        self.op(name)?.call(args);
        Ok(self)
    }

    /// Record `name(args)` as an additional layer.
    pub fn push(&mut self, name: &str, args: Args) -> Result<&mut Self, PlotError> {
        self.layer(name)?.call(args);
        Ok(self)
    }

    /// Run a safe function and return its result.
    pub fn invoke(&self, name: &str, args: &Args) -> Result<Value, PlotError> {
        match ops::safe_function(name) {
            Some(f) => f(args),
            None => match ops::lookup(name) {
                Ok(_) => Err(PlotError::NotImmediate(name.to_string())),
                Err(e) => Err(e),
            },
        }
    }

    pub fn script(&self) -> &[RecordedCall] {
        &self.script
    }

    /// Forget every recorded call.
    pub fn clear(&mut self) {
        self.script.clear();
    }

    pub fn clear_figure(&mut self) {
        self.clear();
    }

    /// Forget recorded data but keep titles, limits and other settings.
    pub fn clear_data(&mut self) {
        self.script.retain(|c| c.kind() == OpKind::Setting);
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = Some((width, height));
    }

    pub fn set_theme(&mut self, name: &str) {
        self.theme = Some(name.to_string());
    }

    /// Replay the script into a fresh figure and render it as ANSI text.
    ///
    /// Size and theme set on the facade win over recorded `plotsize` and
    /// `theme` calls.
    pub fn build(&mut self, registry: &ThemeRegistry) -> Result<String, PlotError> {
        self.figure.reset();
        for call in &self.script {
            call.replay(&mut self.figure)?;
        }
        if let Some(size) = self.size {
            self.figure.size = size;
        }
        if let Some(theme) = &self.theme {
            self.figure.theme = theme.clone();
        }
        debug!(
            calls = self.script.len(),
            width = self.figure.size.0,
            height = self.figure.size.1,
            theme = %self.figure.theme,
            "building plot"
        );
        self.figure.build(registry)
    }

    pub fn sin(periods: f64, length: usize, amplitude: f64, phase: f64, decay: f64) -> Vec<f64> {
        utility::sin(periods, length, amplitude, phase, decay)
    }

    pub fn square(periods: f64, length: usize, amplitude: f64) -> Vec<f64> {
        utility::square(periods, length, amplitude)
    }

    pub fn colorize(
        text: &str,
        fg: Option<&PlotColor>,
        style: Option<&str>,
        bg: Option<&PlotColor>,
    ) -> Result<String, PlotError> {
        utility::colorize(text, fg, style, bg)
    }

    pub fn uncolorize(text: &str) -> String {
        utility::uncolorize(text)
    }

    pub fn transpose(rows: &[Vec<Value>]) -> Vec<Vec<Value>> {
        utility::transpose(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_names_are_immediate() {
        let mut plt = Plot::new();
        assert!(matches!(plt.member("sin").unwrap(), Member::Immediate(_)));
        assert!(plt.script().is_empty());
    }

    #[test]
    fn safe_names_cannot_be_recorded() {
        let mut plt = Plot::new();
        assert_eq!(
            plt.op("square").unwrap_err(),
            PlotError::NotRecordable("square".into())
        );
    }

    #[test]
    fn draw_ops_cannot_be_invoked() {
        let plt = Plot::new();
        assert_eq!(
            plt.invoke("plot", &Args::new()).unwrap_err(),
            PlotError::NotImmediate("plot".into())
        );
    }

    #[test]
    fn layer_appends_even_for_known_name() {
        let mut plt = Plot::new();
        plt.call("plot", Args::new().arg(vec![1.0])).unwrap();
        plt.push("plot", Args::new().arg(vec![2.0])).unwrap();
        assert_eq!(plt.script().len(), 2);
        plt.call("plot", Args::new().arg(vec![3.0])).unwrap();
        assert_eq!(plt.script().len(), 2);
        assert_eq!(plt.script()[1].args(), Some(&Args::new().arg(vec![3.0])));
    }

    #[test]
    fn clear_data_keeps_settings() {
        let mut plt = Plot::new();
        plt.call("title", Args::new().arg("t"))
            .unwrap()
            .call("plot", Args::new().arg(vec![1.0, 2.0]))
            .unwrap()
            .call("xlabel", Args::new().arg("x"))
            .unwrap();
        plt.clear_data();
        let names: Vec<_> = plt.script().iter().map(RecordedCall::name).collect();
        assert_eq!(names, vec!["title", "xlabel"]);
    }
}
