use ariadne::Source;
use pretty_assertions::assert_eq;
use sym_logic::{parse, Assignment, Node};
use sym_parser::error::kind;

fn a() -> Node {
    Node::var("a")
}

fn b() -> Node {
    Node::var("b")
}

fn c() -> Node {
    Node::var("c")
}

#[test]
fn operator_levels() {
    assert_eq!(parse("a | b & c").unwrap(), a() | (b() & c()));
    assert_eq!(parse("a = b > c").unwrap(), Node::iff(a(), Node::implies(b(), c())));
    assert_eq!(parse("a ^ b | c").unwrap(), (a() ^ b()) | c());
    assert_eq!(parse("a > b > c").unwrap(), Node::implies(Node::implies(a(), b()), c()));
}

#[test]
fn functions_and_constants() {
    assert_eq!(
        parse("not(a) & nand(b, true) | nor(0, 1)").unwrap(),
        (!a() & Node::nand(b(), Node::Const(true))) | Node::nor(Node::Const(false), Node::Const(true)),
    );
}

#[test]
fn evaluation() {
    let node = parse("(a > b) & (b > c) > (a > c)").unwrap();
    assert!(node.is_tautology().unwrap());

    let node = parse("a ^ b").unwrap();
    let assignment = Assignment::from([("a", true), ("b", true)]);
    assert_eq!(node.eval(&assignment), Ok(false));
}

#[test]
fn rendering_reparses_to_same_tree() {
    for input in [
        "a & (b | c)",
        "(a > b) > c",
        "a > (b > c)",
        "not(a = b) ^ nor(a, c)",
        "a | b ^ c",
        "1 & x1 = false",
    ] {
        let node = parse(input).unwrap();
        let rendered = node.to_string();
        assert_eq!(parse(&rendered).unwrap(), node, "`{}` rendered as `{}`", input, rendered);
    }
}

#[test]
fn reduction_keeps_truth_table() {
    for input in [
        "a & 1 | b & 0",
        "not(not(a)) > a",
        "nand(a, a) = not(a)",
        "(a ^ 1) ^ (b = 0)",
    ] {
        let node = parse(input).unwrap();
        let reduced = node.reduce(&Assignment::new());
        assert!(node.equivalent(&reduced).unwrap(), "`{}` reduced to `{}`", input, reduced);
    }

    assert_eq!(parse("a & 1 | b & 0").unwrap().reduce(&Assignment::new()), a());
}

#[test]
fn equality() {
    assert!(parse("a & b").unwrap().is_equal(&parse("b & a").unwrap()));
    assert!(!parse("a > b").unwrap().is_equal(&parse("b > a").unwrap()));
}

#[test]
fn contained_variables() {
    let vars = parse("q & true | p > nor(r, q)").unwrap().contained_variables();
    assert_eq!(vars.into_iter().collect::<Vec<_>>(), vec!["p", "q", "r"]);
}

#[test]
fn errors() {
    assert!(parse("a + b").unwrap_err().is::<kind::InvalidCharacter>());
    assert!(parse("a & 2").unwrap_err().is::<kind::InvalidValue>());
    assert!(parse("not(a, b)").unwrap_err().is::<kind::WrongArgumentCount>());
    assert!(parse("a & & b").unwrap_err().is::<kind::MissingLeftOperand>());
}

#[test]
fn unknown_function_report() {
    let input = "nad(a, b)";
    let err = parse(input).unwrap_err();

    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    let report = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

    assert!(report.contains("the `nad` function does not exist"));
    assert!(report.contains("`nand`"));
}
