// Tests for the file lock that guards read-modify-write cycles.
use derek::context::{AppContext, TestContext};
use derek::model::Task;
use derek::storage::LocalStorage;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_read_modify_write() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("export.txt");
    fs::write(&path, "").unwrap();

    // Start every thread at the same moment
    let thread_count = 10;
    let barrier = Arc::new(Barrier::new(thread_count));

    let mut handles = vec![];
    for i in 0..thread_count {
        let b = barrier.clone();
        let path = path.clone();
        handles.push(thread::spawn(move || {
            b.wait();
            let res = LocalStorage::with_lock(&path, || {
                let mut tasks = LocalStorage::parse_text(&fs::read_to_string(&path)?)?;
                tasks.push(Task::todo(&format!("Task {}", i)).unwrap());
                LocalStorage::atomic_write(&path, LocalStorage::to_text_string(&tasks))
            });
            assert!(res.is_ok(), "locked write failed in thread {}", i);
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let tasks = LocalStorage::parse_text(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(tasks.len(), thread_count, "an update was lost");
    for i in 0..thread_count {
        let name = format!("Task {}", i);
        assert!(
            tasks.iter().any(|t| t.description == name),
            "missing {}",
            name
        );
    }
}

#[test]
fn test_lock_file_sits_next_to_data() {
    let ctx = TestContext::new();
    let storage = LocalStorage::new(&ctx).unwrap();
    storage.save(&[Task::todo("a").unwrap()]).unwrap();

    let dir = ctx.get_data_dir().unwrap();
    assert!(dir.join("tasks.json").exists());
    assert!(dir.join("tasks.json.lock").exists());
    assert!(!dir.join("tasks.tmp").exists());
}
