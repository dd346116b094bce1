//! 计算器解析器示例
//!
//! 本示例展示了如何直接在 parser-framework 的 `Parser` 游标上
//! 手写递归下降解析器：解析器只负责查询（is_next / next / substring），
//! 位置的移动完全由调用方控制。
//!
//! 支持的语法：
//! - 数字（整数和浮点数）
//! - 四则运算：+、-、*、/
//! - 幂运算：^（右结合）
//! - 括号：()
//! - 一元运算符：负号（-5）
//!
//! 用法：`calc-parser "1 + 2 * 3"`，不带参数时运行内置示例。

use parser_example::{evaluate, parse, Expr};

fn print_ast_tree(expr: &Expr, indent: usize) {
    let pad = "  ".repeat(indent);
    match expr {
        Expr::Number(n) => println!("{}Number({})", pad, n),
        Expr::Negate(inner) => {
            println!("{}Negate", pad);
            print_ast_tree(inner, indent + 1);
        }
        Expr::Binary { op, left, right } => {
            println!("{}Binary({})", pad, op);
            print_ast_tree(left, indent + 1);
            print_ast_tree(right, indent + 1);
        }
    }
}

fn main() {
    env_logger::init();
    println!("=== 计算器解析器示例 ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let expressions: Vec<String> = if args.is_empty() {
        [
            "3 + 4",
            "2 * 3.14",
            "(1 + 2) * 3",
            "2 ^ 3 ^ 2",
            "10 / 2.5",
            "-5",
            "3 + 4 * 5",
            "1 / 0",
            "2 * (3",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    for expr in &expressions {
        println!("表达式: {}", expr);
        println!("{}", "=".repeat(50));

        match parse(expr) {
            Ok(ast) => {
                println!("  AST 树形结构:");
                print_ast_tree(&ast, 2);
                match evaluate(&ast) {
                    Ok(value) => println!("  结果: {}", value),
                    Err(err) => println!("  求值失败: {}", err),
                }
            }
            Err(err) => println!("  解析失败: {}", err),
        }
        println!();
    }
}
