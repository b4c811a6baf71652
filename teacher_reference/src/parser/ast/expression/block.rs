use crate::{
    lexer::{TokenKind, Tokens},
    parser::{
        ast::{AstNode, Statement},
        combinators::Comb,
        FromTokens, ParseError,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl FromTokens<TokenKind> for Block {
    fn parse(tokens: &mut Tokens<TokenKind>) -> Result<AstNode, ParseError> {
        let matcher = Comb::LBRACE >> (Comb::STATEMENT ^ ()) >> Comb::RBRACE;

        let mut result = matcher.parse(tokens)?.into_iter();

        let mut statements = vec![];

        while let Some(AstNode::Statement(statement)) = result.next() {
            statements.push(statement);
        }

        Ok(Block { statements }.into())
    }
}

impl From<Block> for AstNode {
    fn from(value: Block) -> Self {
        AstNode::Block(value)
    }
}
