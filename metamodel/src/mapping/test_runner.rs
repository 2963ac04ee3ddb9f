#![cfg(test)]

//! This module runs test cases defined in `metamodel/test/cases`.
//!
//! Each test case consists of two files, named in terms of `<name>`, the name of the test case:
//! * `<name>.json`: a mapping set
//! * `<name>.nt`: the expected graph, as N-Triples
//!
//! This runner scans that directory for all such pairs of files, converts each mapping set to a
//! graph and makes sure that it matches the expected graph. Both are compared as sorted sets of
//! lines, so the expected file can list triples in any order. Test cases should give every
//! mapping a `mapping_id`, since blank node labels are not stable.

use super::MappingSet;
use crate::Format;
use ansi_term::Color;
use anyhow::Error;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::fs::{self, File};
use std::path::Path;

#[test]
fn mapping_set_test_cases() -> Result<(), Error> {
    crate::init_logging();

    // Discover test cases.
    let cases = Path::new(env!("CARGO_MANIFEST_DIR")).join("test/cases");
    let mut test_cases = cases
        .read_dir()?
        .filter_map(|dirent| {
            let path = dirent.unwrap().path();
            if path.extension()?.to_str().unwrap() == "json" {
                Some(TestCase::new(&path).unwrap())
            } else {
                None
            }
        })
        .collect::<Vec<_>>();
    test_cases.sort_by(|a, b| a.name.cmp(&b.name));
    assert!(!test_cases.is_empty(), "no test cases in {}", cases.display());

    let results = test_cases.into_iter().map(TestCase::run).collect::<Vec<_>>();
    for result in &results {
        println!("{}", result);
    }
    if results.iter().any(TestResult::failed) {
        Err(Error::msg(format!("{}", Color::Red.paint("tests failed"))))
    } else {
        println!("All test cases passed.");
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct TestCase {
    name: OsString,
    input: MappingSet,
    expected: BTreeSet<String>,
}

impl TestCase {
    fn new(input_path: impl AsRef<Path>) -> Result<Self, Error> {
        let input_path = input_path.as_ref();
        let name = input_path.file_stem().unwrap();
        let input = MappingSet::from_reader(File::open(input_path)?)?;
        let expected = fs::read_to_string(input_path.with_extension("nt"))?;
        Ok(Self {
            name: name.into(),
            input,
            expected: normalize(&expected),
        })
    }

    fn run(self) -> TestResult {
        TestResult {
            name: self.name,
            failure: Self::do_test(&self.input, &self.expected).err(),
        }
    }

    fn do_test(input: &MappingSet, expected: &BTreeSet<String>) -> Result<(), Error> {
        let actual = normalize(&input.to_graph()?.serialize(Format::NTriples));
        if actual == *expected {
            return Ok(());
        }
        let missing = expected.difference(&actual).cloned().collect::<Vec<_>>();
        let unexpected = actual.difference(expected).cloned().collect::<Vec<_>>();
        Err(Error::msg(format!(
            "missing triples:\n{}\nunexpected triples:\n{}",
            missing.join("\n"),
            unexpected.join("\n")
        )))
    }
}

struct TestResult {
    name: OsString,
    failure: Option<anyhow::Error>,
}

impl TestResult {
    fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

impl Display for TestResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}...", self.name.to_string_lossy())?;
        if let Some(err) = &self.failure {
            writeln!(f, "{}", Color::Red.paint("FAILED"))?;
            write!(f, "{err}")?;
        } else {
            write!(f, "{}", Color::Green.paint("OK"))?;
        }
        Ok(())
    }
}

fn normalize(ntriples: &str) -> BTreeSet<String> {
    ntriples
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
