/// The identifier table.
///
/// Stores every declared variable and function of one calculator session in a
/// single name-ordered namespace and implements the declare, assign and
/// lookup operations.
pub mod calculator;
/// The expression resolution engine.
///
/// Resolves the value of a declared function by recursively resolving its
/// operands against the identifier table and applying the recorded operator.
pub mod resolver;
