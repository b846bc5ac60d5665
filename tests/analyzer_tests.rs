use coogle::analyzers::c::CAnalyzer;
use coogle::analyzers::cpp::CppAnalyzer;
use coogle::analyzers::Analyzer;
use coogle::{is_signature_match, parse_function_signature, FunctionDecl, SignatureStorage};
use indoc::indoc;
use std::path::PathBuf;

fn parse_c(content: &str) -> Vec<FunctionDecl> {
    CAnalyzer::new()
        .parse(content, PathBuf::from("test.c"))
        .unwrap()
}

fn parse_cpp(content: &str) -> Vec<FunctionDecl> {
    CppAnalyzer::new()
        .parse(content, PathBuf::from("test.cpp"))
        .unwrap()
}

fn find<'d>(decls: &'d [FunctionDecl], name: &str) -> &'d FunctionDecl {
    decls
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("no declaration named {name} in {decls:#?}"))
}

#[test]
fn c_function_definitions() {
    let decls = parse_c(indoc! {r#"
        int add(int a, int b) {
            return a + b;
        }

        void increment(int *value) {
            (*value)++;
        }
    "#});

    let add = find(&decls, "add");
    assert_eq!(add.ret_type, "int");
    assert_eq!(add.param_types, vec!["int", "int"]);
    assert_eq!(add.line, 1);

    let increment = find(&decls, "increment");
    assert_eq!(increment.ret_type, "void");
    assert_eq!(increment.param_types, vec!["int *"]);
    assert_eq!(increment.line, 5);
}

#[test]
fn c_pointer_return_types() {
    let decls = parse_c(indoc! {r#"
        char *get_string(void) {
            return (char *)"hello";
        }

        const char *get_message(void) {
            return "ready";
        }
    "#});

    let get_string = find(&decls, "get_string");
    assert_eq!(get_string.ret_type, "char *");
    // (void) means zero parameters
    assert!(get_string.param_types.is_empty());

    let get_message = find(&decls, "get_message");
    assert_eq!(get_message.ret_type, "const char *");
}

#[test]
fn c_prototypes_are_reported() {
    let decls = parse_c(indoc! {r#"
        int sub(int, int);
        void process(void *data, int size);
    "#});

    let sub = find(&decls, "sub");
    assert_eq!(sub.ret_type, "int");
    assert_eq!(sub.param_types, vec!["int", "int"]);
    assert_eq!(sub.line, 1);

    let process = find(&decls, "process");
    assert_eq!(process.param_types, vec!["void *", "int"]);
}

#[test]
fn c_function_pointer_parameters() {
    let decls = parse_c(indoc! {r#"
        void run_callback(void (*callback)(int)) {
            callback(42);
        }
    "#});

    let run = find(&decls, "run_callback");
    assert_eq!(run.param_types.len(), 1);
    assert_eq!(run.param_types[0], "void (*)(int)");
}

#[test]
fn c_function_pointer_variables_are_not_functions() {
    let decls = parse_c(indoc! {r#"
        int (*handler)(int);
        int x = 3;
    "#});
    assert!(decls.is_empty(), "unexpected declarations: {decls:#?}");
}

#[test]
fn cpp_reference_parameters_and_templates() {
    let decls = parse_cpp(indoc! {r#"
        #include <string>
        #include <vector>

        std::string greet(const std::string &name) {
            return "Hello, " + name;
        }

        std::vector<int> double_elements(const std::vector<int> &input, size_t limit);
    "#});

    let greet = find(&decls, "greet");
    assert_eq!(greet.ret_type, "std::string");
    assert_eq!(greet.param_types, vec!["const std::string &"]);

    let double_elements = find(&decls, "double_elements");
    assert_eq!(double_elements.ret_type, "std::vector<int>");
    assert_eq!(
        double_elements.param_types,
        vec!["const std::vector<int> &", "size_t"]
    );
}

#[test]
fn cpp_method_declarations() {
    let decls = parse_cpp(indoc! {r#"
        class Buffer {
        public:
            int size() const;
            void append(const char *data, int len);
        };
    "#});

    let size = find(&decls, "size");
    assert_eq!(size.ret_type, "int");
    assert!(size.param_types.is_empty());

    let append = find(&decls, "append");
    assert_eq!(append.param_types, vec!["const char *", "int"]);
}

#[test]
fn extracted_declarations_feed_the_matcher() {
    let decls = parse_cpp(indoc! {r#"
        #include <string>

        std::string greet(const std::string &name) {
            return name;
        }

        int add(int a, int b) {
            return a + b;
        }
    "#});

    let mut query_storage = SignatureStorage::new();
    let query = parse_function_signature(&mut query_storage, "std::string(*)").unwrap();

    let mut storage = SignatureStorage::new();
    let matched: Vec<&str> = decls
        .iter()
        .filter(|decl| {
            let candidate = storage.build(&decl.ret_type, &decl.param_types);
            is_signature_match(&query, &candidate)
        })
        .map(|decl| decl.name.as_str())
        .collect();

    assert_eq!(matched, vec!["greet"]);
}
