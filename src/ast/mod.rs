/// Syntax tree module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: Node kinds and the immutable `SyntaxNode`
/// - printer: Indented text rendering of a tree
pub mod ast;
pub mod printer;
