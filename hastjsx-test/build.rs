#![allow(
	missing_docs,
	clippy::missing_docs_in_private_items,
	clippy::similar_names
)]

use std::{collections::BTreeMap, io::Write, path::PathBuf};

use quote::quote;

#[derive(Debug)]
struct TestSuite {
	hast_file: PathBuf,
	cases: BTreeMap<String, PathBuf>,
}

fn main() {
	println!("cargo:rerun-if-changed=tests/");
	println!("cargo:rerun-if-changed=build.rs");

	let suites = discover_suites();
	let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
	let dest_path = out_dir.join("tests.rs");

	let mut file = std::fs::File::create(dest_path).unwrap();

	for (suite_name, suite) in suites {
		let hast_src = std::fs::read_to_string(&suite.hast_file).unwrap_or_else(|_| {
			panic!(
				"Failed to read hast fixture file: {}",
				suite.hast_file.display()
			)
		});

		let mut tests = vec![];

		for (case_name, case_path) in suite.cases {
			let case_src = std::fs::read_to_string(&case_path).unwrap_or_else(|_| {
				panic!("Failed to read test-case file: {}", case_path.display())
			});

			let test_fn_name = syn::Ident::new(&case_name, cs());

			tests.push(quote! {
				#[test]
				fn #test_fn_name() {
					const CASE_SRC: &str = #case_src;

					use clap::Parser;

					let case: serde_json::Value =
						serde_json::from_str(CASE_SRC).expect("test case is not valid JSON");

					let mut argv = vec!["hastjsx".to_string()];
					argv.extend(
						case["args"]
							.as_array()
							.into_iter()
							.flatten()
							.map(|arg| arg.as_str().expect("arguments must be strings").to_string()),
					);

					let args = hastjsx_cli::Args::try_parse_from(argv).expect("invalid arguments");
					let result = hastjsx_cli::run(HAST_SRC, &args);

					if let Some(expected) = case.get("error") {
						let error = match result {
							Ok(output) => panic!("conversion succeeded: {}", output.code),
							Err(error) => error,
						};
						assert_eq!(Some(error.to_string().as_str()), expected.as_str());
						return;
					}

					let output = result.expect("conversion failed");

					eprintln!("--------------- PROGRAM ---------------");
					eprintln!("{}", output.code);

					let program: serde_json::Value =
						serde_json::from_str(&output.code).expect("output is not valid JSON");
					assert_eq!(program, case["expected"]);
				}
			});
		}

		let mod_name = syn::Ident::new(&suite_name, cs());
		let ts = quote! {
			#[cfg(test)]
			mod #mod_name {
				const HAST_SRC: &str = #hast_src;

				#(#tests)*
			}
		};

		let f = syn::parse2::<syn::File>(ts).unwrap();

		write!(file, "{}", prettyplease::unparse(&f)).unwrap();
	}
}

fn cs() -> proc_macro2::Span {
	proc_macro2::Span::call_site()
}

fn discover_suites() -> BTreeMap<String, TestSuite> {
	// 1. Crawl `CARGO_MANIFEST_DIR/tests` for `.json` files.
	// 2. Suites are `<suite>.hast.json`; cases are `<suite>.<case>.json`.
	// 3. Panic on any case without a matching suite.
	// 4. Panic on any folders.
	// 5. Panic on any suites without cases.
	// 6. Panic on any filenames that do not match the above patterns.
	// 7. Suite names and test case names must be valid Rust identifiers,
	//    and must be snake case. Panic if not.
	let mut suites = BTreeMap::new();
	let mut cases = vec![];
	let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
	let tests_dir = PathBuf::from(manifest_dir).join("tests");
	for entry in std::fs::read_dir(tests_dir).unwrap() {
		let entry = entry.unwrap();
		let path = entry.path();
		assert!(
			!path.is_dir(),
			"Directories are not allowed in the tests/ folder: {}",
			path.display()
		);
		let filename = path.file_name().unwrap().to_string_lossy().to_string();
		if let Some(suite_name) = filename.strip_suffix(".hast.json") {
			assert!(
				is_valid_rust_identifier(suite_name),
				"Suite name is not a valid Rust identifier: {suite_name}"
			);
			suites.insert(
				suite_name.to_string(),
				TestSuite {
					hast_file: path,
					cases: BTreeMap::new(),
				},
			);
		} else if let Some(suite_pair) = filename.strip_suffix(".json") {
			let parts: Vec<&str> = suite_pair.rsplitn(2, '.').collect();
			assert!(
				parts.len() == 2,
				"Test case filename does not match pattern <suite>.<case>.json: {filename}"
			);
			let case_name = parts[0];
			let suite_name = parts[1];
			assert!(
				is_valid_rust_identifier(suite_name),
				"Suite name is not a valid Rust identifier: {suite_name}"
			);
			assert!(
				is_valid_rust_identifier(case_name),
				"Case name is not a valid Rust identifier: {case_name}"
			);
			cases.push((suite_name.to_string(), case_name.to_string(), path));
		} else {
			panic!("Invalid file in tests/ folder: {filename}");
		}
	}
	// Directory order is arbitrary, so cases are matched once every suite is known.
	for (suite_name, case_name, path) in cases {
		let suite = suites.get_mut(&suite_name).unwrap_or_else(|| {
			panic!("Test case '{case_name}' has no matching suite '{suite_name}'")
		});
		suite.cases.insert(case_name, path);
	}
	for (suite_name, suite) in &suites {
		assert!(
			!suite.cases.is_empty(),
			"Suite '{suite_name}' has no test cases"
		);
	}
	suites
}

fn is_valid_rust_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
		_ => return false,
	}
	for c in chars {
		if !(c.is_ascii_alphanumeric() || c == '_') {
			return false;
		}
	}
	true
}
