mod common;

use std::fs;

use common::run;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "lum"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let (result, output) = run(&source);
        if let Err(e) = result {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(output, expected, "output of {path:?}");
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
