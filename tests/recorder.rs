use serde_json::json;
use termPlot::engine::{Args, PlotError};
use termPlot::plot::{Member, Plot};

#[test]
fn clearing_discards_every_recorded_call() {
    let mut plt = Plot::new();
    for name in ["title", "xlabel", "ylabel", "plot", "grid"] {
        plt.op(name).unwrap();
    }
    assert_eq!(plt.script().len(), 5);
    plt.clear();
    assert!(plt.script().is_empty());
}

#[test]
fn reinvoking_updates_in_place() {
    let mut plt = Plot::new();
    plt.call("title", Args::new().arg("first")).unwrap();
    plt.call("plot", Args::new().arg(vec![1.0, 2.0])).unwrap();
    plt.call("title", Args::new().arg("second")).unwrap();

    let script = plt.script();
    assert_eq!(script.len(), 2);
    assert_eq!(script[0].name(), "title");
    assert_eq!(script[0].args(), Some(&Args::new().arg("second")));
}

#[test]
fn unknown_names_fail_before_recording() {
    let mut plt = Plot::new();
    assert_eq!(
        plt.member("pie_chart").unwrap_err(),
        PlotError::NoSuchOperation("pie_chart".into())
    );
    assert!(plt.script().is_empty());
}

#[test]
fn resolved_but_uninvoked_calls_are_skipped() {
    let registry = termPlot::ThemeRegistry::with_builtins();
    let mut resolved = Plot::new();
    resolved.op("title").unwrap();
    let mut empty = Plot::new();
    assert_eq!(resolved.build(&registry).unwrap(), empty.build(&registry).unwrap());
}

#[test]
fn member_call_chains() {
    let mut plt = Plot::new();
    match plt.member("xlim").unwrap() {
        Member::Recorded(call) => {
            call.call(Args::new().arg(0).arg(1)).call(Args::new().arg(0).arg(5));
        }
        Member::Immediate(_) => panic!("xlim is a draw operation"),
    }
    assert_eq!(plt.script()[0].args(), Some(&Args::new().arg(0).arg(5)));
}

#[test]
fn safe_functions_run_immediately() {
    let plt = Plot::new();
    let value = plt
        .invoke("uncolorize", &Args::new().arg("\u{1b}[1mbold\u{1b}[0m"))
        .unwrap();
    assert_eq!(value, json!("bold"));
    assert!(plt.script().is_empty());
}

#[test]
fn bad_arguments_surface_at_build() {
    let registry = termPlot::ThemeRegistry::with_builtins();
    let mut plt = Plot::new();
    plt.call("xlim", Args::new().arg(3).arg(1)).unwrap();
    assert!(matches!(
        plt.build(&registry),
        Err(PlotError::BadArgument { ref op, .. }) if op == "xlim"
    ));
}
