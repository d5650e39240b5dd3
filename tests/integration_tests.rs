//! End-to-end classification tests

mod common;

use common::{branch_tags, classify, classify_json};

#[test]
fn test_single_if() {
    let (report, total) = classify("int f(int x){ if (x) return 1; else return 0; }");

    assert_eq!(total, 2);
    let expected = "function: f\n\
                    \tIf\tID: 0\tLine: 1\tColumn: 15\tFilename: test.c\t\n\
                    Total number of branches: 2\n";
    assert_eq!(report, expected);
}

#[test]
fn test_switch_without_default_is_implicit() {
    let (report, total) = classify("void g(int x) { switch (x) { case 1: break; case 2: break; } }");

    assert_eq!(total, 3);
    let expected = "function: g\n\
                    \tImpDef\tID: 0\tLine: 1\tColumn: 17\tFilename: test.c\t\n\
                    \tCase\tID: 1\tLine: 1\tColumn: 30\tFilename: test.c\t\n\
                    \tCase\tID: 2\tLine: 1\tColumn: 45\tFilename: test.c\t\n\
                    Total number of branches: 3\n";
    assert_eq!(report, expected);
}

#[test]
fn test_switch_with_default_emits_nothing_for_the_switch() {
    let (report, total) =
        classify("void g(int x) { switch (x) { case 1: break; default: break; } }");

    assert_eq!(total, 2);
    assert_eq!(branch_tags(&report), ["Case", "Default"]);
    assert!(report.contains("\tCase\tID: 0\t"));
    assert!(report.contains("\tDefault\tID: 1\t"));
    assert!(!report.contains("ImpDef"));
}

#[test]
fn test_default_in_nested_switch_does_not_count_for_the_outer() {
    let source = "void h(int x) { switch (x) { case 1: switch (x) { default: break; } break; } }";
    let (report, total) = classify(source);

    // Outer switch has no direct default label; the inner one does.
    assert_eq!(total, 3);
    assert_eq!(branch_tags(&report), ["ImpDef", "Case", "Default"]);
}

#[test]
fn test_n_ifs_give_sequential_ids_and_double_weight() {
    let source = "int f(int a, int b, int c) {\n\
                  \x20   if (a) return 1;\n\
                  \x20   if (b) return 2;\n\
                  \x20   if (c) return 3;\n\
                  \x20   return 0;\n\
                  }\n";
    let (report, total) = classify(source);

    assert_eq!(total, 6);
    assert_eq!(branch_tags(&report), ["If", "If", "If"]);
    assert!(report.contains("\tIf\tID: 0\tLine: 2\t"));
    assert!(report.contains("\tIf\tID: 1\tLine: 3\t"));
    assert!(report.contains("\tIf\tID: 2\tLine: 4\t"));
}

#[test]
fn test_loops_count_two_each() {
    let source = "void spin(int n) { while (n > 0) { n--; } }";
    let (report, total) = classify(source);
    assert_eq!(total, 2);
    assert_eq!(branch_tags(&report), ["Loop"]);

    let source = "void spin(int n) { do { n--; } while (n); }";
    let (_, total) = classify(source);
    assert_eq!(total, 2);

    let source = "void forever(void) { for (;;) { break; } }";
    let (report, total) = classify(source);
    assert_eq!(total, 2);
    assert_eq!(branch_tags(&report), ["Loop"]);
}

#[test]
fn test_ternary_counts_two() {
    let (report, total) = classify("int f(int x) { return x ? 1 : 0; }");
    assert_eq!(total, 2);
    assert_eq!(branch_tags(&report), ["?:"]);
}

#[test]
fn test_ternary_under_if_is_reported_in_pre_order() {
    let (report, total) = classify("int f(int x) { if (x ? 1 : 0) return 1; return 0; }");

    assert_eq!(total, 4);
    assert_eq!(branch_tags(&report), ["If", "?:"]);
    assert!(report.contains("\tIf\tID: 0\t"));
    assert!(report.contains("\t?:\tID: 1\t"));
}

#[test]
fn test_function_lines_precede_their_branches() {
    let source = "int a(int x) { if (x) return 1; return 0; }\n\
                  int b(int x) { if (x) return 2; return 0; }\n";
    let (report, _) = classify(source);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "function: a");
    assert!(lines[1].starts_with("\tIf\tID: 0\t"));
    assert_eq!(lines[2], "function: b");
    assert!(lines[3].starts_with("\tIf\tID: 1\t"));
}

#[test]
fn test_report_is_deterministic() {
    let source = "int f(int x) { switch (x) { case 1: return x ? 1 : 0; } while (x) x--; return 0; }";
    let first = classify(source);
    let second = classify(source);
    assert_eq!(first, second);
}

#[test]
fn test_json_report_matches_text_totals() {
    let source = "int f(int x){ if (x) return 1; else return 0; }";
    let (report, total) = classify_json(source);
    assert_eq!(total, 2);

    let lines: Vec<serde_json::Value> = report
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["function"], "f");
    assert_eq!(lines[1]["kind"], "Conditional");
    assert_eq!(lines[1]["id"], 0);
    assert_eq!(lines[1]["line"], 1);
    assert_eq!(lines[1]["column"], 15);
    assert_eq!(lines[1]["file"], "test.c");
    assert_eq!(lines[1]["weight"], 2);
    assert_eq!(lines[2]["total_branches"], 2);
}
