use ariadne::{Fmt, Source};
use sym_attrs::ErrorKind;
use sym_error::{Error, ErrorKind as _, EXPR};

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown thing `{}`", name),
    labels = ["this thing", "and this one"],
    help = format!("try {}", "something else".fg(EXPR)),
)]
struct UnknownThing {
    name: String,
}

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "nothing here", labels = [""])]
struct Nothing;

/// Renders the report of the error to a plain string, without colors.
fn render(err: &Error, src: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(src)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn message_and_labels() {
    let err = Error::new(vec![0..3, 6..9], UnknownThing { name: "foo".to_string() });
    let report = render(&err, "foo + bar");

    assert!(report.contains("unknown thing `foo`"));
    assert!(report.contains("this thing"));
    assert!(report.contains("and this one"));
    assert!(report.contains("try something else"));
}

#[test]
fn display_uses_first_span() {
    let err = Error::new(vec![2..3], Nothing);
    assert_eq!(err.to_string(), "nothing here (at 2..3)");
}

#[test]
fn downcast_kind() {
    let err = Error::new(vec![0..1], Nothing);
    assert!(err.is::<Nothing>());
    assert!(!err.is::<UnknownThing>());
    assert_eq!(err.downcast_ref::<Nothing>(), Some(&Nothing));
}

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = format!("`{}` appears twice", name))]
struct Repeated {
    name: String,
}

#[test]
fn kind_without_labels_or_help() {
    let kind = Repeated { name: "x".to_string() };
    assert_eq!(kind.message(), "`x` appears twice");
    assert!(kind.labels().is_empty());
    assert_eq!(kind.help(), None);

    let err = Error::new(vec![0..1, 4..5], kind);
    let report = render(&err, "x + x");
    assert!(report.contains("`x` appears twice"));
}
