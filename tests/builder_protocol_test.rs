use pretty_assertions::assert_eq;
use weavekit::testkit::{overriding_hierarchy, RecordingEngine, StubSignatureWriter};
use weavekit::{
    ClassModel, ClassPool, Facade, InsertableMethodBuilder, InsertionPoint, MethodModel,
    TargetModule, WeaveError,
};

#[test]
fn test_after_call_insertion_end_to_end() {
    let target = ClassModel::new("Target").with_method(MethodModel::new("foo"));
    let mut engine = RecordingEngine::new();

    let insertion = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module(&target)
        .select_method_if_exists("foo")
        .after_call_to("bar")
        .with_body("log();")
        .else_create_method_if_not_exists("void foo(){BODY}")
        .finalize()
        .unwrap();

    assert_eq!(insertion.module().name(), "Target");
    assert_eq!(insertion.target_method_name(), "foo");
    assert_eq!(insertion.insertion_after_method(), Some("bar"));
    assert_eq!(insertion.insertion_before_method(), None);
    assert_eq!(insertion.body(), "log();");
    assert_eq!(insertion.full_method(), "void foo(){log();}");
}

#[test]
fn test_before_call_insertion_keeps_fields() {
    let target = ClassModel::new("int");
    let mut engine = RecordingEngine::new();

    let insertion = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module(&target)
        .select_method_if_exists("target")
        .before_call_to("insertionBeforeMethod")
        .with_body("body")
        .else_create_method_if_not_exists("fullMethod")
        .finalize()
        .unwrap();

    assert_eq!(insertion.target_method_name(), "target");
    assert_eq!(
        insertion.insertion_before_method(),
        Some("insertionBeforeMethod")
    );
    assert_eq!(insertion.insertion_after_method(), None);
    assert_eq!(insertion.body(), "body");
    // no placeholder in the skeleton: left as is, body dropped
    assert_eq!(insertion.full_method(), "fullMethod");
}

#[test]
fn test_empty_strings_still_make_a_complete_insertion() {
    let target = ClassModel::new("int");
    let mut engine = RecordingEngine::new();

    let insertion = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module(&target)
        .select_method_if_exists("")
        .after_call_to("")
        .with_body("")
        .else_create_method_if_not_exists("")
        .finalize()
        .unwrap();

    assert_eq!(insertion.insertion_after_method(), Some(""));
    assert_eq!(insertion.full_method(), "");
}

#[test]
fn test_finalize_does_not_touch_engine() {
    let target = ClassModel::new("Target");
    let mut engine = RecordingEngine::new();

    InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module(&target)
        .select_method_if_exists("foo")
        .after_call_to("bar")
        .with_body("x();")
        .else_create_method_if_not_exists("void foo(){BODY}")
        .finalize()
        .unwrap();

    assert!(engine.applied().is_empty());
}

#[test]
fn test_build_and_apply_calls_engine_once() {
    let target = ClassModel::new("Target");
    let mut engine = RecordingEngine::new();

    InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module(&target)
        .select_method_if_exists("foo")
        .after_call_to("bar")
        .with_body("x();")
        .else_create_method_if_not_exists("void foo(){BODY}")
        .build_and_apply()
        .unwrap();

    assert_eq!(engine.applied().len(), 1);
    assert_eq!(engine.applied()[0].full_method, "void foo(){x();}");
}

#[test]
fn test_before_override_end_to_end() {
    let target = overriding_hierarchy("foo");
    let mut engine = RecordingEngine::new();
    let writer = StubSignatureWriter::new("public void foo()", "super.foo()");

    let insertion = InsertableMethodBuilder::<ClassModel>::with_signature_writer(&mut engine, &writer)
        .set_target_module(&target)
        .before_override_of("foo")
        .unwrap()
        .with_body("")
        .finalize()
        .unwrap();

    assert_eq!(insertion.full_method(), "public void foo() {  super.foo() }");
    assert_eq!(insertion.target_method_name(), "foo");
    assert_eq!(insertion.insertion_point(), &InsertionPoint::BeforeSuperCall);
    assert_eq!(insertion.insertion_before_method(), None);
    assert_eq!(insertion.insertion_after_method(), None);
    assert_eq!(writer.signature_calls(), 1);
    assert_eq!(writer.super_calls(), 1);
}

#[test]
fn test_after_override_applies_through_engine() {
    let target = overriding_hierarchy("foo");
    let mut engine = RecordingEngine::new();
    let writer = StubSignatureWriter::new("public void foo()", "super.foo()");

    InsertableMethodBuilder::<ClassModel>::with_signature_writer(&mut engine, &writer)
        .set_target_module(&target)
        .after_override_of("foo")
        .unwrap()
        .with_body("done();")
        .build_and_apply()
        .unwrap();

    let applied = &engine.applied()[0];
    assert_eq!(applied.module, "Target");
    assert_eq!(applied.insertion_point, InsertionPoint::AfterSuperCall);
    assert_eq!(applied.full_method, "public void foo() { super.foo() done(); }");
}

#[test]
fn test_override_of_missing_method_fails_before_rendering() {
    let target = ClassModel::new("Target").with_method(MethodModel::new("bar"));
    let mut engine = RecordingEngine::new();
    let writer = StubSignatureWriter::new("unused", "unused");

    let result = InsertableMethodBuilder::<ClassModel>::with_signature_writer(&mut engine, &writer)
        .set_target_module(&target)
        .after_override_of("foo");

    match result {
        Err(WeaveError::TargetMethodNotFound { module, method }) => {
            assert_eq!(module, "Target");
            assert_eq!(method, "foo");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("override of a missing method should fail"),
    }
    assert_eq!(writer.signature_calls(), 0);
}

#[test]
fn test_engine_failure_reaches_caller_unchanged() {
    let target = ClassModel::new("Target");
    let mut engine = RecordingEngine::failing("CannotCompile: bad body");

    let err = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module(&target)
        .select_method_if_exists("foo")
        .before_call_to("bar")
        .with_body("{")
        .else_create_method_if_not_exists("void foo(){BODY}")
        .build_and_apply()
        .unwrap_err();

    assert_eq!(err.to_string(), "CannotCompile: bad body");
    assert!(err.downcast_ref::<WeaveError>().is_none());
}

#[test]
fn test_target_module_resolved_by_name() {
    let mut pool = ClassPool::new();
    pool.insert(ClassModel::new("com.example.Target").with_method(MethodModel::new("foo")));
    let mut engine = RecordingEngine::new();

    let insertion = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module_named(&pool, "com.example.Target")
        .unwrap()
        .before_override_of("foo")
        .unwrap()
        .with_body("log();")
        .finalize()
        .unwrap();

    assert_eq!(insertion.module().name(), "com.example.Target");
    assert_eq!(
        insertion.full_method(),
        "public void foo() { log(); super.foo(); }"
    );
}

#[test]
fn test_unknown_module_name_is_rejected() {
    let pool = ClassPool::new();
    let mut engine = RecordingEngine::new();

    let result = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
        .set_target_module_named(&pool, "Missing");

    assert!(matches!(result, Err(WeaveError::ModuleNotFound(name)) if name == "Missing"));
}

#[test]
fn test_finalized_insertion_applies_through_facade_on_same_engine() {
    let target = overriding_hierarchy("foo");
    let mut engine = RecordingEngine::new();
    let writer = StubSignatureWriter::new("public void foo()", "super.foo();");

    let insertion = InsertableMethodBuilder::<ClassModel>::with_signature_writer(&mut engine, &writer)
        .set_target_module(&target)
        .after_override_of("foo")
        .unwrap()
        .with_body("log();")
        .finalize()
        .unwrap();

    Facade::<ClassModel>::new(&mut engine).apply(insertion).unwrap();

    assert_eq!(engine.applied().len(), 1);
    assert_eq!(engine.applied()[0].module, "Target");
    assert_eq!(
        engine.applied()[0].full_method,
        "public void foo() { super.foo(); log(); }"
    );
}
