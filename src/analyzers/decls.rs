//! Function declaration extraction from C/C++ parse trees.
//!
//! The C and C++ grammars share the node kinds used here (definitions,
//! prototype declarations, declarator nesting), so one walker serves both
//! front-ends. The goal is the four fields the matching engine consumes:
//! return-type spelling, ordered parameter-type spellings, file, line.

use crate::core::FunctionDecl;
use std::path::Path;
use tree_sitter::{Node, Tree};

pub fn collect_function_decls(tree: &Tree, source: &str, path: &Path) -> Vec<FunctionDecl> {
    let mut decls = Vec::new();
    walk(tree.root_node(), source, path, &mut decls);
    decls
}

fn walk(node: Node, source: &str, path: &Path, out: &mut Vec<FunctionDecl>) {
    if matches!(
        node.kind(),
        "function_definition" | "declaration" | "field_declaration"
    ) {
        if let Some(decl) = extract_function(node, source, path) {
            out.push(decl);
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, path, out);
    }
}

fn extract_function(node: Node, source: &str, path: &Path) -> Option<FunctionDecl> {
    let declarator = node.child_by_field_name("declarator")?;
    let mut pointer_suffix = String::new();
    let func = function_declarator(declarator, &mut pointer_suffix)?;
    let name_node = declared_name(func)?;
    let ret_type = return_type_spelling(node, declarator, source, &pointer_suffix)?;
    Some(FunctionDecl {
        name: node_text(name_node, source).to_string(),
        ret_type,
        param_types: parameter_types(func, source),
        file: path.to_path_buf(),
        line: name_node.start_position().row + 1,
    })
}

/// Descends through pointer/reference declarators to the function
/// declarator, collecting the decorations that belong to the return type
/// (`char *f()` hangs the `*` off the declarator, not the type).
fn function_declarator<'t>(node: Node<'t>, suffix: &mut String) -> Option<Node<'t>> {
    match node.kind() {
        "function_declarator" => Some(node),
        "pointer_declarator" => {
            suffix.push('*');
            function_declarator(node.child_by_field_name("declarator")?, suffix)
        }
        "reference_declarator" => {
            let mut inner = None;
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "&" => suffix.push('&'),
                    "&&" => suffix.push_str("&&"),
                    _ => inner = Some(child),
                }
            }
            function_declarator(inner?, suffix)
        }
        _ => None,
    }
}

/// The declared name node, if this declarator introduces a function.
///
/// A parenthesized inner declarator means a function-pointer variable
/// (`int (*fp)(int);`), which is not a function declaration.
fn declared_name<'t>(func: Node<'t>) -> Option<Node<'t>> {
    let inner = func.child_by_field_name("declarator")?;
    match inner.kind() {
        "identifier"
        | "field_identifier"
        | "qualified_identifier"
        | "operator_name"
        | "destructor_name"
        | "template_function" => Some(inner),
        _ => None,
    }
}

/// Reassembles the return type from the qualifier and type children that
/// precede the declarator, plus the pointer/reference decorations found
/// on the way down to the function declarator.
fn return_type_spelling(
    node: Node,
    declarator: Node,
    source: &str,
    suffix: &str,
) -> Option<String> {
    let type_node = node.child_by_field_name("type")?;
    let mut parts: Vec<&str> = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.id() == declarator.id() {
            break;
        }
        if child.kind() == "type_qualifier" || child.id() == type_node.id() {
            parts.push(node_text(child, source));
        }
    }
    let mut spelling = parts.join(" ");
    if spelling.is_empty() {
        spelling = node_text(type_node, source).to_string();
    }
    if !suffix.is_empty() {
        spelling.push(' ');
        spelling.push_str(suffix);
    }
    Some(spelling)
}

/// Parameter type spellings in positional order.
///
/// A lone `void` parameter list means zero parameters, matching how a
/// semantic parser reports `f(void)`. Variadic `...` has no type to match
/// against and is skipped.
fn parameter_types(func: Node, source: &str) -> Vec<String> {
    let Some(list) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut types = Vec::new();
    let mut cursor = list.walk();
    for child in list.children(&mut cursor) {
        match child.kind() {
            "parameter_declaration" | "optional_parameter_declaration" => {
                types.push(parameter_type_spelling(child, source));
            }
            _ => {}
        }
    }
    if types.len() == 1 && types[0] == "void" {
        return Vec::new();
    }
    types
}

/// The type spelling of one parameter: the parameter text with the
/// declared identifier spliced out (`int *value` becomes `int *`) and any
/// default argument dropped.
fn parameter_type_spelling(param: Node, source: &str) -> String {
    let mut text = node_text(param, source).to_string();
    if let Some(eq) = text.find('=') {
        text.truncate(eq);
    }
    if let Some(name) = declared_identifier(param) {
        let start = name.start_byte() - param.start_byte();
        let end = name.end_byte() - param.start_byte();
        if end <= text.len() {
            text.replace_range(start..end, "");
        }
    }
    text.trim().to_string()
}

/// Follows the declarator chain of a parameter to its declared
/// identifier, if it has one (abstract declarators do not).
fn declared_identifier<'t>(param: Node<'t>) -> Option<Node<'t>> {
    let mut node = param.child_by_field_name("declarator")?;
    loop {
        match node.kind() {
            "identifier" => return Some(node),
            "pointer_declarator"
            | "reference_declarator"
            | "array_declarator"
            | "function_declarator"
            | "parenthesized_declarator" => {
                node = declarator_child(node)?;
            }
            _ => return None,
        }
    }
}

fn declarator_child<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if let Some(child) = node.child_by_field_name("declarator") {
        return Some(child);
    }
    // Reference and parenthesized declarators do not label the field.
    let mut cursor = node.walk();
    let first = node.named_children(&mut cursor).next();
    first
}

fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    &source[node.start_byte()..node.end_byte()]
}
