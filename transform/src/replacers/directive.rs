//! Directive replacer.

use crate::encoder::encode_value;
use emend_core::Value;
use emend_schema::{DirectiveArgument, DirectiveNode, FieldDef, FieldSyntax};
use indexmap::IndexMap;

/// Append one directive annotation to the descriptor's syntax node.
///
/// The node and its directive list are created on first use. Argument
/// values are converted to literal nodes by the encoder.
pub(crate) fn apply(mut field: FieldDef, name: &str, args: &IndexMap<String, Value>) -> FieldDef {
    let node = DirectiveNode {
        name: name.to_string(),
        arguments: args
            .iter()
            .map(|(arg_name, value)| DirectiveArgument {
                name: arg_name.clone(),
                value: encode_value(value),
            })
            .collect(),
    };
    field
        .syntax
        .get_or_insert_with(FieldSyntax::new)
        .directives
        .push(node);
    field
}
