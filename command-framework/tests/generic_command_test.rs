use command_framework::{Command, CommandError, CommandFactory, Value};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn sum(params: &[Value]) -> anyhow::Result<Value> {
    let total = params
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| anyhow::anyhow!("not a number: {}", v))
        })
        .sum::<anyhow::Result<f64>>()?;
    Ok(Value::from(total))
}

fn numbers() -> Vec<Value> {
    vec![json!(1.0), json!(2.0), json!(3.0)]
}

#[test]
fn test_sum_execute() {
    let cmd = Arc::new(CommandFactory::new().sync(sum).with_type_name("CommandSum"));
    assert_eq!(cmd.execute(&numbers()).unwrap(), json!(6.0));
}

#[tokio::test]
async fn test_sum_execute_async_offloads_sync_delegate() {
    let cmd = Arc::new(CommandFactory::new().sync(sum).with_type_name("CommandSum"));
    let direct = cmd.clone().execute(&numbers()).unwrap();
    let bridged = cmd.clone().execute_async(numbers()).await.unwrap();
    assert_eq!(bridged, json!(6.0));
    assert_eq!(bridged, direct);
}

#[test]
fn test_sync_only_bridging_matches_for_many_inputs() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let cmd = Arc::new(CommandFactory::new().sync(sum));
    for n in 0..20 {
        let params: Vec<Value> = (0..n).map(|i| json!(i as f64 * 0.5)).collect();
        let direct = cmd.clone().execute(&params).unwrap();
        let bridged = runtime
            .block_on(cmd.clone().execute_async(params))
            .unwrap();
        assert_eq!(direct, bridged);
    }
}

#[test]
fn test_unimplemented_execute_fails_with_both_names() {
    let cmd = Arc::new(CommandFactory::new().unimplemented());
    let err = cmd.execute(&[]).unwrap_err();
    assert!(err.is_not_implemented());
    let message = err.to_string();
    assert!(message.contains("GenericCommand"));
    assert!(message.contains("Execute"));
    assert!(message.contains("ExecuteAsync"));
}

#[tokio::test]
async fn test_unimplemented_execute_async_fails_without_hanging() {
    let cmd = Arc::new(CommandFactory::new().unimplemented());
    let result = tokio::time::timeout(Duration::from_secs(5), cmd.execute_async(vec![]))
        .await
        .expect("execute_async must not hang");
    assert!(matches!(result, Err(CommandError::NotImplemented { .. })));
}

#[test]
fn test_async_only_execute_blocks_without_runtime() {
    let cmd = Arc::new(CommandFactory::new().asynchronous(|params: Vec<Value>| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(json!(params.len()))
    }));
    assert_eq!(cmd.execute(&[json!(1), json!(2)]).unwrap(), json!(2));
}

#[tokio::test]
async fn test_async_only_execute_async_runs_inline() {
    let cmd = Arc::new(
        CommandFactory::new().asynchronous(|_| async { Ok(json!("async")) }),
    );
    assert_eq!(cmd.execute_async(vec![]).await.unwrap(), json!("async"));
}

#[test]
fn test_both_paths_are_used_directly() {
    let cmd = Arc::new(
        CommandFactory::new().both(|_| Ok(json!("sync")), |_| async { Ok(json!("async")) }),
    );
    assert_eq!(cmd.clone().execute(&[]).unwrap(), json!("sync"));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    assert_eq!(
        runtime.block_on(cmd.execute_async(vec![])).unwrap(),
        json!("async")
    );
}

#[tokio::test]
async fn test_delegate_failure_propagates() {
    let cmd = Arc::new(CommandFactory::new().sync(sum));
    let err = cmd
        .clone()
        .execute_async(vec![json!("x")])
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::Failed(_)));
    assert_eq!(err.to_string(), "not a number: \"x\"");
    assert!(cmd.execute(&[json!(null)]).is_err());
}

#[tokio::test]
async fn test_panicking_delegate_reports_task_failure() {
    let cmd = Arc::new(CommandFactory::new().sync(|_| panic!("boom")));
    let err = cmd.execute_async(vec![]).await.unwrap_err();
    assert!(matches!(err, CommandError::TaskFailed(_)));
}

#[test]
fn test_sync_only_execute_async_on_futures_executor() {
    let cmd = Arc::new(CommandFactory::new().sync(sum).with_type_name("CommandSum"));
    let result = futures::executor::block_on(cmd.execute_async(numbers()));
    assert_eq!(result.unwrap(), json!(6.0));
}

#[test]
fn test_panicking_delegate_on_futures_executor_reports_task_failure() {
    let cmd = Arc::new(CommandFactory::new().sync(|_| panic!("boom")));
    let err = futures::executor::block_on(cmd.execute_async(vec![])).unwrap_err();
    assert!(matches!(err, CommandError::TaskFailed(_)));
}

#[test]
fn test_identity() {
    let factory = CommandFactory::with_start(3);
    let cmd = factory
        .sync(sum)
        .with_type_name("CommandSum")
        .with_description_url("https://example.org/sum");
    assert_eq!(cmd.id(), 3);
    assert_eq!(cmd.string_id(), "CommandSum_00003");
    assert_eq!(cmd.description(), "A command of type CommandSum, ID = 3.");
    assert_eq!(
        cmd.description_url().as_deref(),
        Some("https://example.org/sum")
    );

    let described = factory.sync(sum).with_description("Adds numbers");
    assert_eq!(described.description(), "Adds numbers");
    described.base().set_description("");
    assert_eq!(
        described.description(),
        "A command of type GenericCommand, ID = 4."
    );
}

#[test]
fn test_ids_unique_under_concurrent_construction() {
    let factory = Arc::new(CommandFactory::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || {
                (0..50)
                    .map(|_| factory.unimplemented().id())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<i32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 200);
    assert_eq!(ids.first(), Some(&1));
    assert_eq!(ids.last(), Some(&200));
}
