//! 命令适配器示例
//!
//! 展示 command-framework 的同步/异步桥接：
//! 1. 只提供同步实现的命令，也可以通过 execute_async 调用
//! 2. 只提供异步实现的命令，也可以通过 execute 调用
//! 3. 两者都没有实现的命令会立即报 NotImplemented，而不是死循环

use command_framework::{Command, CommandFactory, Value};
use parser_example::{evaluate, parse};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn sum(params: &[Value]) -> anyhow::Result<Value> {
    let mut total = 0.0;
    for param in params {
        total += param
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("参数不是数字: {}", param))?;
    }
    Ok(Value::from(total))
}

fn calc(params: &[Value]) -> anyhow::Result<Value> {
    let source = params
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow::anyhow!("需要一个表达式字符串"))?;
    let ast = parse(source)?;
    Ok(Value::from(evaluate(&ast)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("=== 命令适配器示例 ===\n");

    let factory = CommandFactory::new();

    let sum_cmd = Arc::new(
        factory
            .sync(sum)
            .with_type_name("CommandSum")
            .with_description("把所有数字参数相加"),
    );
    let calc_cmd = Arc::new(factory.sync(calc).with_type_name("CommandCalc"));
    let slow_cmd = Arc::new(
        factory
            .asynchronous(|params: Vec<Value>| async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(json!(params.len()))
            })
            .with_type_name("CommandCount"),
    );
    let empty_cmd = Arc::new(factory.unimplemented());

    let numbers = vec![json!(1.0), json!(2.0), json!(3.0)];

    println!("【{}】{}", sum_cmd.string_id(), sum_cmd.description());
    println!("  execute       -> {}", sum_cmd.clone().execute(&numbers)?);
    println!(
        "  execute_async -> {}",
        sum_cmd.clone().execute_async(numbers.clone()).await?
    );

    let expression = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(1 + 2) * 3 ^ 2".to_string());
    println!("\n【{}】{}", calc_cmd.string_id(), calc_cmd.description());
    println!(
        "  execute_async({:?}) -> {}",
        expression,
        calc_cmd.clone().execute_async(vec![json!(expression)]).await?
    );

    println!("\n【{}】{}", slow_cmd.string_id(), slow_cmd.description());
    let counted = tokio::task::spawn_blocking({
        let slow_cmd = Arc::clone(&slow_cmd);
        move || slow_cmd.execute(&[json!("a"), json!("b")])
    })
    .await??;
    println!("  execute (阻塞桥接) -> {}", counted);

    println!("\n【{}】{}", empty_cmd.string_id(), empty_cmd.description());
    match empty_cmd.clone().execute(&[]) {
        Ok(value) => println!("  意外成功: {}", value),
        Err(err) => println!("  execute 失败: {}", err),
    }
    match empty_cmd.execute_async(vec![]).await {
        Ok(value) => println!("  意外成功: {}", value),
        Err(err) => println!("  execute_async 失败: {}", err),
    }

    Ok(())
}
