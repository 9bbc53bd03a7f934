use easylogin_toolbox::{Toolbox, ToolboxConfig, ToolboxError};

#[test]
fn shared_instance_is_created_once() {
    let first = Toolbox::shared().unwrap();
    let second = Toolbox::shared().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.table().version(), easylogin_schema::BUILTIN_TABLE_VERSION);

    let err = Toolbox::install(ToolboxConfig::default()).unwrap_err();
    assert!(matches!(err, ToolboxError::AlreadyInitialized));
}

#[test]
fn shared_instance_from_many_threads() {
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| Toolbox::shared().unwrap() as *const Toolbox as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
