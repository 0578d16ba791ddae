//! End-to-end behaviour of the mock driver as seen by a GLES backend.

use std::panic::{AssertUnwindSafe, catch_unwind};

use mockgles::gl::{self, PFNGLPOPDEBUGGROUPKHRPROC, PFNGLPUSHDEBUGGROUPKHRPROC};
use mockgles::resolver::{self, MockProc};
use mockgles::{MockConfig, MockGles, MockRegistry, ProcTable};
use serial_test::serial;

#[test]
#[serial]
fn test_default_extension_list() {
    mockgles::logging::init_for_tests();
    let mock = MockGles::new();
    let gl = mock.proc_table();

    assert_eq!(gl.get_integer(gl::GL_NUM_EXTENSIONS), 1);
    assert_eq!(
        gl.get_stringi(gl::GL_EXTENSIONS, 0).as_deref(),
        Some("GL_KHR_debug")
    );
    assert!(gl.supports_debug_groups());
}

#[test]
#[serial]
fn test_extension_override() {
    let mock = MockGles::with_extensions(["GL_A", "GL_B"]);
    let gl = mock.proc_table();

    assert_eq!(gl.get_integer(gl::GL_NUM_EXTENSIONS), 2);
    assert_eq!(gl.get_stringi(gl::GL_EXTENSIONS, 0).as_deref(), Some("GL_A"));
    assert_eq!(gl.get_stringi(gl::GL_EXTENSIONS, 1).as_deref(), Some("GL_B"));
    assert_eq!(gl.get_stringi(gl::GL_EXTENSIONS, 2), None);
    assert!(!gl.has_extension("GL_KHR_debug"));
}

#[test]
#[serial]
fn test_extension_count_matches_any_list() {
    let lists: [&[&str]; 4] = [
        &[],
        &["GL_EXT_one"],
        &["GL_EXT_one", "GL_EXT_two", "GL_EXT_three"],
        &["GL_KHR_debug", "GL_OES_texture_half_float", "GL_EXT_sRGB", "GL_EXT_color_buffer_float"],
    ];

    for list in lists {
        let mock = MockGles::with_config(&MockConfig::new().with_extensions(list.iter().copied()));
        let gl = mock.proc_table();

        assert_eq!(gl.get_integer(gl::GL_NUM_EXTENSIONS), list.len() as i32);
        assert_eq!(gl.extensions(), list);
        assert_eq!(mock.extensions(), list);
    }
}

#[test]
#[serial]
fn test_debug_group_calls_are_recorded_in_order() {
    let mock = MockGles::new();
    let gl = mock.proc_table();

    gl.push_debug_group(gl::GL_DEBUG_SOURCE_APPLICATION_KHR, 0, "frame");
    gl.pop_debug_group();

    assert_eq!(
        mock.captured_calls(),
        vec!["PushDebugGroupKHR", "PopDebugGroupKHR"]
    );
}

#[test]
#[serial]
fn test_call_log_grows_by_one_per_marker() {
    let mock = MockGles::new();
    let gl = mock.proc_table();

    let pattern = [true, true, false, true, false, false, true, false];
    let mut expected = Vec::new();
    for (i, push) in pattern.into_iter().enumerate() {
        if push {
            gl.push_debug_group(gl::GL_DEBUG_SOURCE_APPLICATION_KHR, i as u32, "group");
            expected.push("PushDebugGroupKHR");
        } else {
            gl.pop_debug_group();
            expected.push("PopDebugGroupKHR");
        }
        assert_eq!(mock.call_count(), i + 1);
    }

    assert_eq!(mock.captured_calls(), expected);
}

#[test]
#[serial]
fn test_second_instance_is_fatal() {
    let mock = MockGles::new();
    mock.proc_table().pop_debug_group();

    let second = catch_unwind(AssertUnwindSafe(MockGles::new));
    assert!(second.is_err());

    // The first instance still owns the mock.
    mock.proc_table().pop_debug_group();
    assert_eq!(mock.captured_calls(), vec!["PopDebugGroupKHR", "PopDebugGroupKHR"]);
    assert!(MockRegistry::global().is_active());
}

#[test]
#[serial]
#[should_panic(expected = "MockGLES is already being used by another test.")]
fn test_second_instance_panics_with_message() {
    let _first = MockGles::new();
    let _second = MockGles::new();
}

#[test]
#[serial]
fn test_try_acquire_reports_contention() {
    let _mock = MockGles::new();
    let result = MockRegistry::global().try_acquire(&MockConfig::default());
    assert_eq!(result.err(), Some(mockgles::MockGlesError::AlreadyInUse));
}

#[test]
#[serial]
fn test_vendor_and_unknown_string_queries() {
    let mock = MockGles::with_extensions(["GL_X"]);
    let gl = mock.proc_table();

    assert_eq!(gl.get_string(gl::GL_VENDOR), "MockGLES");
    assert_eq!(gl.get_string(gl::GL_VERSION), "3.0");
    assert_eq!(gl.get_string(gl::GL_SHADING_LANGUAGE_VERSION), "3.0");
    assert_eq!(gl.get_string(0x1234), "");
    assert_eq!(gl.get_error(), gl::GL_NO_ERROR);
}

#[test]
#[serial]
fn test_stale_function_pointers_after_release() {
    let mock = MockGles::new();

    let push: PFNGLPUSHDEBUGGROUPKHRPROC =
        unsafe { std::mem::transmute(resolver::resolve(c"glPushDebugGroupKHR")) };
    let pop: PFNGLPOPDEBUGGROUPKHRPROC =
        unsafe { std::mem::transmute(resolver::resolve(c"glPopDebugGroupKHR")) };
    let table = mock.proc_table().clone();

    unsafe { push(gl::GL_DEBUG_SOURCE_APPLICATION_KHR, 0, 0, std::ptr::null()) };
    assert_eq!(mock.call_count(), 1);
    drop(mock);

    // Still callable, nothing is recorded anywhere.
    unsafe { push(gl::GL_DEBUG_SOURCE_APPLICATION_KHR, 0, 0, std::ptr::null()) };
    unsafe { pop() };
    table.pop_debug_group();
    assert!(!MockRegistry::global().is_active());

    let next = MockGles::new();
    assert!(next.captured_calls().is_empty());
}

#[test]
#[serial]
fn test_unrecognised_names_resolve_to_shared_no_op() {
    let _mock = MockGles::new();

    let flush = resolver::resolve(c"glFlush");
    let draw = resolver::resolve(c"glDrawElements");
    assert!(!flush.is_null());
    assert_eq!(flush, draw);
    assert_eq!(flush, MockProc::NoOp.address());
    for (_, proc) in MockProc::NAMED {
        assert_ne!(flush, proc.address());
    }
}

#[test]
#[serial]
fn test_custom_resolver_builds_proc_table() {
    let mock = MockGles::new();
    let table = ProcTable::new(resolver::resolve).unwrap();

    table.push_debug_group(gl::GL_DEBUG_SOURCE_APPLICATION_KHR, 7, "custom");
    assert_eq!(mock.captured_calls(), vec!["PushDebugGroupKHR"]);
}
