use ariadne::{Color, Config as ReportConfig, Fmt, Label, Report, ReportKind};
use leptjson::{ErrorKind, ParseError};

pub type DiagnosticReport<'a> = Report<'a, (&'a String, std::ops::Range<usize>)>;

/// Build a source report for a parse failure in `path`.
pub fn parse_error_report<'a>(path: &'a String, err: &ParseError, color: bool) -> DiagnosticReport<'a> {
    let span = err.span();
    let kind = err.kind();

    let mut report = Report::build(ReportKind::Error, path, span.lo)
        .with_config(ReportConfig::default().with_color(color))
        .with_message(kind.desc())
        .with_label(
            Label::new((path, span.into_range()))
                .with_message(label_message(kind))
                .with_color(Color::Red),
        );

    if let Some(help) = help_message(kind) {
        report.set_help(help);
    }

    report.finish()
}

fn label_message(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::ExpectValue => "input ends here".to_string(),
        ErrorKind::InvalidValue => "not a valid literal or number".to_string(),
        ErrorKind::RootNotSingular => "unexpected content after the value".to_string(),
        ErrorKind::NumberTooBig => format!("does not fit in a {}", "f64".fg(Color::Blue)),
    }
}

fn help_message(kind: ErrorKind) -> Option<String> {
    match kind {
        ErrorKind::ExpectValue => Some(format!(
            "expected one of {}, {}, {} or a number",
            "null".fg(Color::Blue),
            "true".fg(Color::Blue),
            "false".fg(Color::Blue)
        )),
        ErrorKind::InvalidValue => None,
        ErrorKind::RootNotSingular => {
            Some("a document holds exactly one value; remove the extra content".to_string())
        }
        ErrorKind::NumberTooBig => Some(format!(
            "the largest magnitude is about {}",
            "1.7976931348623157e308".fg(Color::Blue)
        )),
    }
}
