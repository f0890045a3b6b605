//! Go parser using native tree-sitter.
//!
//! Extracts the package clause, the import table, and every top-level
//! function declaration with its full parameter and result types. Method
//! declarations (receivers) are not entry-point candidates and are ignored.

use std::path::Path;

use tree_sitter::{Node, Parser, Query, QueryCursor};

use cedetect_core::errors::ParseError;

use super::types::{Declaration, GoFile, ImportTable, TypeRef};

/// Go parser. Create once and reuse; holds compiled queries.
pub struct GoParser {
    parser: Parser,
    function_query: Query,
    import_query: Query,
    package_query: Query,
}

impl GoParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| ParseError::GrammarLoad {
                message: e.to_string(),
            })?;

        let function_query = Query::new(
            &language.into(),
            r#"
            (function_declaration
                name: (identifier) @name
                parameters: (parameter_list) @params
                result: (_)? @result
            ) @function
            "#,
        )
        .map_err(|e| ParseError::GrammarLoad {
            message: format!("function query: {e}"),
        })?;

        let import_query = Query::new(
            &language.into(),
            r#"
            (import_spec
                name: (package_identifier)? @alias
                path: (interpreted_string_literal) @path
            ) @import
            "#,
        )
        .map_err(|e| ParseError::GrammarLoad {
            message: format!("import query: {e}"),
        })?;

        let package_query = Query::new(
            &language.into(),
            r#"(package_clause (package_identifier) @package)"#,
        )
        .map_err(|e| ParseError::GrammarLoad {
            message: format!("package query: {e}"),
        })?;

        Ok(Self {
            parser,
            function_query,
            import_query,
            package_query,
        })
    }

    /// Parse one file's source text.
    ///
    /// Malformed source is an error, never a partial result: the signature
    /// scan must not run over a half-understood file.
    pub fn parse(&mut self, path: &Path, source: &str) -> Result<GoFile, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Syntax {
                path: path.to_path_buf(),
                message: "tree-sitter produced no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                message: syntax_error_message(root),
            });
        }

        let bytes = source.as_bytes();
        let package = self.extract_package(&root, bytes);
        if package.is_empty() {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                message: "missing package clause".to_string(),
            });
        }

        Ok(GoFile {
            path: path.to_path_buf(),
            package,
            imports: self.extract_imports(&root, bytes),
            declarations: self.extract_functions(&root, bytes),
        })
    }

    fn extract_package(&self, root: &Node, source: &[u8]) -> String {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.package_query, *root, source);
        matches
            .next()
            .and_then(|m| m.captures.first())
            .map(|c| node_text(c.node, source).to_string())
            .unwrap_or_default()
    }

    fn extract_imports(&self, root: &Node, source: &[u8]) -> ImportTable {
        let mut table = ImportTable::default();
        let mut cursor = QueryCursor::new();
        let matches = cursor.matches(&self.import_query, *root, source);

        for m in matches {
            let mut path = String::new();
            let mut alias: Option<String> = None;

            for capture in m.captures {
                let capture_name = self.import_query.capture_names()[capture.index as usize];
                match capture_name {
                    "path" => {
                        path = node_text(capture.node, source).trim_matches('"').to_string();
                    }
                    "alias" => {
                        alias = Some(node_text(capture.node, source).to_string());
                    }
                    _ => {}
                }
            }

            if path.is_empty() {
                continue;
            }
            // Implicit alias is the final path segment. This is a documented
            // approximation: a package whose declared name differs from its
            // path segment resolves to the wrong alias.
            let alias =
                alias.unwrap_or_else(|| path.rsplit('/').next().unwrap_or(&path).to_string());
            table.insert(alias, path);
        }

        table
    }

    fn extract_functions(&self, root: &Node, source: &[u8]) -> Vec<Declaration> {
        let mut found: Vec<(usize, Declaration)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let matches = cursor.matches(&self.function_query, *root, source);

        for m in matches {
            let mut name = String::new();
            let mut start = 0usize;
            let mut generic = false;
            let mut params: Vec<TypeRef> = Vec::new();
            let mut results: Vec<TypeRef> = Vec::new();

            for capture in m.captures {
                let capture_name = self.function_query.capture_names()[capture.index as usize];
                match capture_name {
                    "name" => {
                        name = node_text(capture.node, source).to_string();
                    }
                    "params" => {
                        params = parameter_refs(capture.node, source);
                    }
                    "result" => {
                        results = result_refs(capture.node, source);
                    }
                    "function" => {
                        start = capture.node.start_byte();
                        generic = capture.node.child_by_field_name("type_parameters").is_some();
                    }
                    _ => {}
                }
            }

            // Generic functions are outside the catalog's shape space.
            if name.is_empty() || generic {
                continue;
            }
            // Go exports start with uppercase.
            let exported = name.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
            found.push((
                start,
                Declaration {
                    name,
                    exported,
                    params,
                    results,
                },
            ));
        }

        // Query match order is not a contract; first-match selection is, so
        // sort by position in the file.
        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, decl)| decl).collect()
    }
}

/// Expand a parameter list into one TypeRef per declared parameter.
///
/// `func F(a, b T)` declares two parameters of type `T`; an unnamed
/// parameter (`func F(T)`) declares one.
fn parameter_refs(list: Node, source: &[u8]) -> Vec<TypeRef> {
    let mut refs = Vec::new();
    let mut cursor = list.walk();

    for child in list.named_children(&mut cursor) {
        match child.kind() {
            "parameter_declaration" => {
                let Some(ty) = child.child_by_field_name("type") else {
                    continue;
                };
                let type_ref = type_ref_of(ty, source);
                let names = child
                    .children_by_field_name("name", &mut child.walk())
                    .count();
                for _ in 0..names.max(1) {
                    refs.push(type_ref.clone());
                }
            }
            // Variadic parameters can never match the catalog; keep the raw
            // text so they fail equality instead of silently resolving.
            _ => refs.push(TypeRef::unqualified(node_text(child, source))),
        }
    }

    refs
}

/// Result clause: either a single bare type or a parenthesized list.
fn result_refs(node: Node, source: &[u8]) -> Vec<TypeRef> {
    if node.kind() == "parameter_list" {
        parameter_refs(node, source)
    } else {
        vec![type_ref_of(node, source)]
    }
}

fn type_ref_of(node: Node, source: &[u8]) -> TypeRef {
    match node.kind() {
        "type_identifier" => TypeRef::unqualified(node_text(node, source)),
        "qualified_type" => TypeRef {
            alias: node
                .child_by_field_name("package")
                .map(|n| node_text(n, source).to_string()),
            name: node
                .child_by_field_name("name")
                .map(|n| node_text(n, source).to_string())
                .unwrap_or_default(),
            pointer: false,
        },
        "pointer_type" => match node.named_child(0) {
            Some(inner) if inner.kind() != "pointer_type" => TypeRef {
                pointer: true,
                ..type_ref_of(inner, source)
            },
            // `**T` and deeper are outside the catalog; raw text.
            _ => TypeRef::unqualified(node_text(node, source)),
        },
        // Slices, maps, funcs, channels: never in the catalog, keep raw text.
        _ => TypeRef::unqualified(node_text(node, source)),
    }
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn syntax_error_message(root: Node) -> String {
    match first_syntax_error(root) {
        Some(node) => {
            let pos = node.start_position();
            format!("syntax error at line {}, column {}", pos.row + 1, pos.column + 1)
        }
        None => "syntax error".to_string(),
    }
}

fn first_syntax_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child) {
            return Some(found);
        }
    }
    None
}
