use std::fs;

use exprtree::{
    ast::{Node, Operator},
    engine::{
        codegen::Instruction,
        evaluator::evaluate,
        lexer::{Token, tokenize},
        parser::{MAX_DEPTH, build_tree},
        render::{LayoutConfig, layout, text_tree},
    },
    error::{Error, ParseError, RuntimeError},
    parse,
    process,
};
use walkdir::WalkDir;

#[test]
fn demo_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_demo_lines(&content) {
            count += 1;
            assert_value(&expression, expected);
        }
    }

    assert!(count > 0, "No demo expressions found in demos/");
}

fn extract_demo_lines(content: &str) -> Vec<(String, f64)> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```exprtree") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = line.split_once("=>") {
            let expected = expected.trim()
                                   .parse()
                                   .unwrap_or_else(|e| panic!("Bad expected value in {line:?}: {e}"));
            lines.push((expression.to_string(), expected));
        }
    }

    lines
}

fn assert_value(src: &str, expected: f64) {
    match process(src) {
        Ok(report) => assert_eq!(report.value, Ok(expected), "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(tree) => panic!("Expression {src:?} succeeded with {tree} but was expected to fail"),
        Err(e) => e,
    }
}

fn joined(labels: &[String]) -> String {
    labels.join(" ")
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("8-3-2", 3.0);
    assert_value("2*3-8/4", 4.0);
}

#[test]
fn lexer_skips_unknown_characters() {
    let tokens = tokenize("a(12)- b 7").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|(t, _)| *t).collect();
    assert_eq!(kinds, vec![Token::Integer(12), Token::Minus, Token::Integer(7)]);
    assert_eq!(tokens[1].1, 5);
}

#[test]
fn leading_minus_is_an_operator() {
    let tokens = tokenize("-5").unwrap();
    assert_eq!(tokens, vec![(Token::Minus, 0), (Token::Integer(5), 1)]);
    assert!(matches!(assert_failure("-5"),
                     ParseError::MalformedExpression { operator: Operator::Sub,
                                                       position:  0, }));
}

#[test]
fn oversized_literal_is_rejected() {
    let err = assert_failure("1+99999999999999999999");
    assert_eq!(err,
               ParseError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                             position: 2, });
}

#[test]
fn tree_shape_of_mixed_expression() {
    let tree = parse("2+3*4").unwrap();
    let expected = Node::binary(Operator::Add,
                                Node::operand(2),
                                Node::binary(Operator::Mul, Node::operand(3), Node::operand(4)));
    assert_eq!(tree, expected);
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.operator_count(), 2);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn traversals_of_mixed_expression() {
    let report = process("2+3*4").unwrap();
    assert_eq!(joined(&report.traversals.pre_order), "+ 2 * 3 4");
    assert_eq!(joined(&report.traversals.in_order), "2 + 3 * 4");
    assert_eq!(joined(&report.traversals.post_order), "2 3 4 * +");
}

#[test]
fn traversal_display_lists_all_three() {
    let report = process("8-3-2").unwrap();
    assert_eq!(report.traversals.to_string(),
               "Pre-order:  - - 8 3 2\nIn-order:   8 - 3 - 2\nPost-order: 8 3 - 2 -");
}

#[test]
fn building_twice_gives_equal_trees() {
    let tokens = tokenize("9/3+4*2-7").unwrap();
    assert_eq!(build_tree(&tokens).unwrap(), build_tree(&tokens).unwrap());
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(assert_failure(""), ParseError::EmptyExpression);
    assert_eq!(assert_failure(" \t\n "), ParseError::EmptyExpression);
    assert_eq!(assert_failure("abc ()"), ParseError::EmptyExpression);
    assert!(matches!(process(""), Err(Error::Parse(ParseError::EmptyExpression))));
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(assert_failure("+2"),
                     ParseError::MalformedExpression { operator: Operator::Add,
                                                       position:  0, }));
    assert!(matches!(assert_failure("2++3"),
                     ParseError::MalformedExpression { operator: Operator::Add,
                                                       position:  1, }));
    assert!(matches!(assert_failure("2*"), ParseError::MalformedExpression { .. }));
    assert!(matches!(assert_failure("*"), ParseError::MalformedExpression { .. }));
}

#[test]
fn dangling_operand_is_rejected() {
    assert_eq!(assert_failure("2 3"),
               ParseError::UnexpectedTrailingOperand { value:    3,
                                                       position: 2, });
    assert_eq!(assert_failure("2 3+4"),
               ParseError::UnexpectedTrailingOperand { value:    3,
                                                       position: 2, });
}

#[test]
fn division_by_zero_fails_only_evaluation() {
    let report = process("5/0").unwrap();
    assert_eq!(report.value,
               Err(RuntimeError::DivisionByZero { dividend: 5.0 }));
    assert_eq!(joined(&report.traversals.post_order), "5 0 /");
    assert_eq!(report.program.instructions().last(),
               Some(&Instruction::Apply(Operator::Div)));

    assert_eq!(evaluate(&parse("4/0*2").unwrap()),
               Err(RuntimeError::DivisionByZero { dividend: 4.0 }));
}

#[test]
fn huge_literal_cannot_be_evaluated_exactly() {
    let tree = parse("9007199254740993").unwrap();
    assert_eq!(evaluate(&tree),
               Err(RuntimeError::LiteralTooLarge { value: 9_007_199_254_740_993 }));
}

#[test]
fn generated_code_follows_stack_discipline() {
    let report = process("2+3*4").unwrap();
    let listing: Vec<String> = report.program
                                     .instructions()
                                     .iter()
                                     .map(ToString::to_string)
                                     .collect();
    assert_eq!(listing,
               vec!["MOV AX, 2",
                    "PUSH AX",
                    "MOV AX, 3",
                    "PUSH AX",
                    "MOV AX, 4",
                    "POP BX",
                    "MUL AX, BX, AX",
                    "POP BX",
                    "ADD AX, BX, AX"]);
    assert_eq!(report.program.push_count(), 2);
    assert_eq!(report.program.pop_count(), 2);
}

#[test]
fn program_embeds_code_between_header_and_footer() {
    let report = process(" 1-2 ").unwrap();
    let text = report.program.to_string();

    let header = "; Generated by exprtree\n; Expression: 1-2\nsection .text\nglobal _start\n\n_start:\n";
    assert!(text.starts_with(header), "unexpected header:\n{text}");
    assert!(text.contains("_start:\n    MOV AX, 1\n    PUSH AX\n    MOV AX, 2\n    POP BX\n    SUB AX, BX, AX\n    CALL print_result\n"));
    assert!(text.ends_with("print_result:\n    ; output routine: prints the value held in AX\n    RET\n"));
}

#[test]
fn multi_line_source_stays_in_header_comment() {
    let report = process("2+\n3\r\n  * 4\n").unwrap();
    let text = report.program.to_string();

    assert!(text.starts_with("; Generated by exprtree\n; Expression: 2+ 3 * 4\nsection .text\n"),
            "unexpected header:\n{text}");
    let header: Vec<_> = text.lines().take_while(|l| *l != "_start:").collect();
    assert!(header.iter()
                  .all(|l| l.starts_with(';') || l.is_empty() || *l == "section .text" || *l == "global _start"),
            "raw source line in header:\n{text}");
}

#[test]
fn program_export_contract() {
    use exprtree::engine::codegen::Program;

    assert_eq!(Program::file_name(), "expression.asm");
    assert_eq!(Program::file_name_with_stem("homework"), "homework.asm");
    assert_eq!(Program::CONTENT_TYPE, "text/plain");
}

#[test]
fn program_is_written_into_directory() {
    let dir = std::env::temp_dir().join(format!("exprtree-export-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let report = process("6*7").unwrap();
    let written = report.program.write_to(&dir).unwrap();

    assert_eq!(written, dir.join("expression.asm"));
    assert_eq!(fs::read_to_string(&written).unwrap(), report.program.to_string());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_export_keeps_io_error_as_source() {
    let target = std::env::temp_dir().join(format!("exprtree-missing-{}", std::process::id()))
                                     .join("nested")
                                     .join("out.asm");

    let report = process("1+1").unwrap();
    let err = report.program.write_to(&target).unwrap_err();

    assert!(matches!(&err, Error::Export { path, .. } if *path == target));
    let source = std::error::Error::source(&err).expect("export error should carry its cause");
    assert!(source.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn chain_at_depth_limit_is_accepted() {
    let source = format!("1{}", "+1".repeat(MAX_DEPTH - 1));
    let tree = parse(&source).unwrap();
    assert_eq!(tree.depth(), MAX_DEPTH);
    assert_eq!(evaluate(&tree), Ok(1024.0));
}

#[test]
fn chain_beyond_depth_limit_is_rejected() {
    let source = format!("1{}", "+1".repeat(MAX_DEPTH));
    assert_eq!(assert_failure(&source),
               ParseError::NestedTooDeeply { limit:    MAX_DEPTH,
                                             position: 2 * MAX_DEPTH - 1, });

    let long = format!("1{}", "+1".repeat(200_000));
    assert!(matches!(process(&long),
                     Err(Error::Parse(ParseError::NestedTooDeeply { .. }))));
}

#[test]
fn text_tree_draws_children_left_then_right() {
    let drawing = text_tree(&parse("2+3*4").unwrap());
    let lines: Vec<_> = drawing.lines().collect();
    assert_eq!(lines, vec!["+", "├── 2", "└── *", "    ├── 3", "    └── 4"]);
}

#[test]
fn layout_uses_shrinking_offsets() {
    let layout = layout(&parse("1*2+3*4").unwrap(), &LayoutConfig::default());
    let positions: Vec<_> = layout.nodes
                                  .iter()
                                  .map(|n| (n.label.as_str(), n.x, n.y, n.depth))
                                  .collect();
    assert_eq!(positions,
               vec![("+", 400.0, 40.0, 0),
                    ("*", 280.0, 90.0, 1),
                    ("1", 220.0, 140.0, 2),
                    ("2", 340.0, 140.0, 2),
                    ("*", 520.0, 90.0, 1),
                    ("3", 460.0, 140.0, 2),
                    ("4", 580.0, 140.0, 2)]);
    assert_eq!(layout.edges.len(), 6);
    assert_eq!(layout.bounds(), (200.0, 20.0, 600.0, 160.0));
}
