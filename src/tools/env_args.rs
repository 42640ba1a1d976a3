#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve value associated to an arg passed to the app, written as `--arg-name=value`.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

/// Retrieve an arg value, or fail with `error_if_missing`.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
/// When running tests, env args are extended from within the app.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let global_env_args = std::env::args().collect::<Vec<String>>();
        args.extend_from_slice(&global_env_args);
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value, with_env_args};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec!["--member-card-url=https://example.com/{member_id}".to_owned()],
            vec!["--member-card-token=secret=with=equals".to_owned()],
            vec!["--another-arg=wrong".to_owned()],
            vec!["--member-card-url-suffix=wrong".to_owned()],
        },
        arg_name = {"--member-card-url", "--member-card-token", "--member-card-url", "--member-card-url"},
        expected_result = {
            Some("https://example.com/{member_id}".to_owned()),
            Some("secret=with=equals".to_owned()),
            None,
            None,
        }
    )]
    fn should_retrieve_arg_value(args: Vec<String>, arg_name: &str, expected_result: Option<String>) {
        let result = with_env_args(args, || retrieve_arg_value(arg_name));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_retrieve_expected_arg_value() {
        let arg_name = "--arg-name";
        let arg_value = "arg-value";
        let error = "error!";
        let args = vec![format!("{arg_name}={arg_value}")];

        let result = with_env_args(args, || retrieve_expected_arg_value(arg_name, error)).unwrap();

        assert_eq!(arg_value, result);
    }

    #[test]
    fn should_fail_to_retrieve_expected_arg_value() {
        let arg_name = "--arg-name";
        let error = "error!";

        let result = retrieve_expected_arg_value(arg_name, error).unwrap_err();

        assert_eq!(error, result);
    }
}
