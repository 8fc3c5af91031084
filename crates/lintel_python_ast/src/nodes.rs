use std::fmt;

use num_bigint::BigInt;
use text_size::{TextRange, TextSize};

/// An AST node with a source range.
pub trait Ranged {
    fn range(&self) -> TextRange;

    fn start(&self) -> TextSize {
        self.range().start()
    }

    fn end(&self) -> TextSize {
        self.range().end()
    }
}

/// The top level of a module or statement body.
pub type Suite = Vec<Stmt>;

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    FunctionDef(StmtFunctionDef),
    ClassDef(StmtClassDef),
    Return(StmtReturn),
    Assign(StmtAssign),
    For(StmtFor),
    While(StmtWhile),
    If(StmtIf),
    With(StmtWith),
    Expr(StmtExpr),
    Pass(StmtPass),
    Break(StmtBreak),
    Continue(StmtContinue),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtFunctionDef {
    pub range: TextRange,
    pub name: String,
    pub body: Suite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtClassDef {
    pub range: TextRange,
    pub name: String,
    pub body: Suite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtReturn {
    pub range: TextRange,
    pub value: Option<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtAssign {
    pub range: TextRange,
    pub targets: Vec<Expr>,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtFor {
    pub range: TextRange,
    pub target: Box<Expr>,
    pub iter: Box<Expr>,
    pub body: Suite,
    pub orelse: Suite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtWhile {
    pub range: TextRange,
    pub test: Box<Expr>,
    pub body: Suite,
    pub orelse: Suite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtIf {
    pub range: TextRange,
    pub test: Box<Expr>,
    pub body: Suite,
    pub elif_else_clauses: Vec<ElifElseClause>,
}

/// An `elif` clause (with a test) or a final `else` clause (without one).
#[derive(Clone, Debug, PartialEq)]
pub struct ElifElseClause {
    pub range: TextRange,
    pub test: Option<Expr>,
    pub body: Suite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtWith {
    pub range: TextRange,
    pub items: Vec<Expr>,
    pub body: Suite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtExpr {
    pub range: TextRange,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtPass {
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtBreak {
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtContinue {
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    BoolOp(ExprBoolOp),
    BinOp(ExprBinOp),
    UnaryOp(ExprUnaryOp),
    Compare(ExprCompare),
    Call(ExprCall),
    Parenthesized(ExprParenthesized),
    NumberLiteral(ExprNumberLiteral),
    BooleanLiteral(ExprBooleanLiteral),
    StringLiteral(ExprStringLiteral),
    NoneLiteral(ExprNoneLiteral),
    Name(ExprName),
}

/// An `and`/`or` chain. The operator is n-ary: `a and b and c` is a single
/// node with three values.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprBoolOp {
    pub range: TextRange,
    pub op: BoolOp,
    pub values: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprBinOp {
    pub range: TextRange,
    pub left: Box<Expr>,
    pub op: Operator,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprUnaryOp {
    pub range: TextRange,
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

/// A comparison chain: `left ops[0] comparators[0] ops[1] comparators[1] …`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprCompare {
    pub range: TextRange,
    pub left: Box<Expr>,
    pub ops: Vec<CmpOp>,
    pub comparators: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprCall {
    pub range: TextRange,
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
}

/// A parenthesized expression. The host tree preserves parentheses as nodes;
/// analysis looks through them.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprParenthesized {
    pub range: TextRange,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprNumberLiteral {
    pub range: TextRange,
    pub value: Number,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprBooleanLiteral {
    pub range: TextRange,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprStringLiteral {
    pub range: TextRange,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprNoneLiteral {
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprName {
    pub range: TextRange,
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, is_macro::Is)]
pub enum Number {
    /// An integer literal, kept exact at any magnitude.
    Int(BigInt),
    /// A float literal. Never treated as an integer constant.
    Float(f64),
}

#[derive(Clone, Debug, PartialEq, is_macro::Is, Copy, Hash, Eq)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BoolOp::And => "and",
            BoolOp::Or => "or",
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, is_macro::Is, Copy, Hash, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

impl Operator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mult => "*",
            Operator::MatMult => "@",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::LShift => "<<",
            Operator::RShift => ">>",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitAnd => "&",
            Operator::FloorDiv => "//",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, is_macro::Is, Copy, Hash, Eq)]
pub enum UnaryOp {
    Invert,
    Not,
    UAdd,
    USub,
}

impl UnaryOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Invert => "~",
            UnaryOp::Not => "not",
            UnaryOp::UAdd => "+",
            UnaryOp::USub => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, is_macro::Is, Copy, Hash, Eq)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

impl CmpOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
            CmpOp::Lt => "<",
            CmpOp::LtE => "<=",
            CmpOp::Gt => ">",
            CmpOp::GtE => ">=",
            CmpOp::Is => "is",
            CmpOp::IsNot => "is not",
            CmpOp::In => "in",
            CmpOp::NotIn => "not in",
        }
    }

    #[must_use]
    pub const fn negate(&self) -> Self {
        match self {
            CmpOp::Eq => CmpOp::NotEq,
            CmpOp::NotEq => CmpOp::Eq,
            CmpOp::Lt => CmpOp::GtE,
            CmpOp::LtE => CmpOp::Gt,
            CmpOp::Gt => CmpOp::LtE,
            CmpOp::GtE => CmpOp::Lt,
            CmpOp::Is => CmpOp::IsNot,
            CmpOp::IsNot => CmpOp::Is,
            CmpOp::In => CmpOp::NotIn,
            CmpOp::NotIn => CmpOp::In,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StmtFunctionDef> for Stmt {
    fn from(node: StmtFunctionDef) -> Self {
        Self::FunctionDef(node)
    }
}

impl From<StmtClassDef> for Stmt {
    fn from(node: StmtClassDef) -> Self {
        Self::ClassDef(node)
    }
}

impl From<StmtReturn> for Stmt {
    fn from(node: StmtReturn) -> Self {
        Self::Return(node)
    }
}

impl From<StmtAssign> for Stmt {
    fn from(node: StmtAssign) -> Self {
        Self::Assign(node)
    }
}

impl From<StmtFor> for Stmt {
    fn from(node: StmtFor) -> Self {
        Self::For(node)
    }
}

impl From<StmtWhile> for Stmt {
    fn from(node: StmtWhile) -> Self {
        Self::While(node)
    }
}

impl From<StmtIf> for Stmt {
    fn from(node: StmtIf) -> Self {
        Self::If(node)
    }
}

impl From<StmtWith> for Stmt {
    fn from(node: StmtWith) -> Self {
        Self::With(node)
    }
}

impl From<StmtExpr> for Stmt {
    fn from(node: StmtExpr) -> Self {
        Self::Expr(node)
    }
}

impl From<StmtPass> for Stmt {
    fn from(node: StmtPass) -> Self {
        Self::Pass(node)
    }
}

impl From<StmtBreak> for Stmt {
    fn from(node: StmtBreak) -> Self {
        Self::Break(node)
    }
}

impl From<StmtContinue> for Stmt {
    fn from(node: StmtContinue) -> Self {
        Self::Continue(node)
    }
}

impl From<ExprBoolOp> for Expr {
    fn from(node: ExprBoolOp) -> Self {
        Self::BoolOp(node)
    }
}

impl From<ExprBinOp> for Expr {
    fn from(node: ExprBinOp) -> Self {
        Self::BinOp(node)
    }
}

impl From<ExprUnaryOp> for Expr {
    fn from(node: ExprUnaryOp) -> Self {
        Self::UnaryOp(node)
    }
}

impl From<ExprCompare> for Expr {
    fn from(node: ExprCompare) -> Self {
        Self::Compare(node)
    }
}

impl From<ExprCall> for Expr {
    fn from(node: ExprCall) -> Self {
        Self::Call(node)
    }
}

impl From<ExprParenthesized> for Expr {
    fn from(node: ExprParenthesized) -> Self {
        Self::Parenthesized(node)
    }
}

impl From<ExprNumberLiteral> for Expr {
    fn from(node: ExprNumberLiteral) -> Self {
        Self::NumberLiteral(node)
    }
}

impl From<ExprBooleanLiteral> for Expr {
    fn from(node: ExprBooleanLiteral) -> Self {
        Self::BooleanLiteral(node)
    }
}

impl From<ExprStringLiteral> for Expr {
    fn from(node: ExprStringLiteral) -> Self {
        Self::StringLiteral(node)
    }
}

impl From<ExprNoneLiteral> for Expr {
    fn from(node: ExprNoneLiteral) -> Self {
        Self::NoneLiteral(node)
    }
}

impl From<ExprName> for Expr {
    fn from(node: ExprName) -> Self {
        Self::Name(node)
    }
}

impl Ranged for Stmt {
    fn range(&self) -> TextRange {
        match self {
            Stmt::FunctionDef(node) => node.range,
            Stmt::ClassDef(node) => node.range,
            Stmt::Return(node) => node.range,
            Stmt::Assign(node) => node.range,
            Stmt::For(node) => node.range,
            Stmt::While(node) => node.range,
            Stmt::If(node) => node.range,
            Stmt::With(node) => node.range,
            Stmt::Expr(node) => node.range,
            Stmt::Pass(node) => node.range,
            Stmt::Break(node) => node.range,
            Stmt::Continue(node) => node.range,
        }
    }
}

impl Ranged for Expr {
    fn range(&self) -> TextRange {
        match self {
            Expr::BoolOp(node) => node.range,
            Expr::BinOp(node) => node.range,
            Expr::UnaryOp(node) => node.range,
            Expr::Compare(node) => node.range,
            Expr::Call(node) => node.range,
            Expr::Parenthesized(node) => node.range,
            Expr::NumberLiteral(node) => node.range,
            Expr::BooleanLiteral(node) => node.range,
            Expr::StringLiteral(node) => node.range,
            Expr::NoneLiteral(node) => node.range,
            Expr::Name(node) => node.range,
        }
    }
}

impl Ranged for ElifElseClause {
    fn range(&self) -> TextRange {
        self.range
    }
}
