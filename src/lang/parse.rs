use super::{ast::*, token::*, Error};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

pub fn parse_command(tokens: &[Token]) -> Option<Command> {
    let mut parse = Parser::new(tokens);
    let command = match parse.next()? {
        Token::Word(Word::Run) => Command::Run,
        Token::Word(Word::List) => Command::List,
        Token::Word(Word::Clear) => Command::Clear,
        Token::Word(Word::Quit) => Command::Quit,
        _ => return None,
    };
    match parse.next() {
        None => Some(command),
        Some(_) => None,
    }
}

/// Nesting of parentheses and unary minus allowed in one expression.
const MAX_DEPTH: usize = 64;

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            token_stream: tokens.iter(),
            peeked: None,
            depth: 0,
        }
    }

    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser::new(tokens);
        let statement = parse.statement()?;
        match parse.next() {
            None => Ok(statement),
            Some(_) => Err(error!(SyntaxError; "UNEXPECTED TOKEN")),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            match self.token_stream.next()? {
                Token::Whitespace(_) => continue,
                t => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, word),
            None => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
            _ => Err(error!(SyntaxError; "EXPECTED RESERVED WORD")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Operator(Operator::Plus)) => {
                    self.next();
                    let rhs = self.term()?;
                    lhs = Expression::Add(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Operator(Operator::Minus)) => {
                    self.next();
                    let rhs = self.term()?;
                    lhs = Expression::Subtract(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Operator(Operator::Multiply)) => {
                    self.next();
                    let rhs = self.factor()?;
                    lhs = Expression::Multiply(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Operator(Operator::Divide)) => {
                    self.next();
                    let rhs = self.factor()?;
                    lhs = Expression::Divide(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        if self.depth >= MAX_DEPTH {
            return Err(error!(SyntaxError; "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let factor = self.nested_factor();
        self.depth -= 1;
        factor
    }

    fn nested_factor(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Ident(i)) => Ok(Expression::Var(i.as_str().into())),
            Some(Token::Literal(s)) => Self::integer(s),
            Some(Token::Operator(Operator::Minus)) => {
                if let Some(Token::Literal(s)) = self.peek() {
                    let negative = Self::integer(&format!("-{}", s))?;
                    self.next();
                    return Ok(negative);
                }
                let operand = self.factor()?;
                Ok(Expression::Subtract(
                    Box::new(Expression::Integer(0)),
                    Box::new(operand),
                ))
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn integer(s: &str) -> Result<Expression> {
        match s.parse::<i32>() {
            Ok(n) => Ok(Expression::Integer(n)),
            Err(_) => Err(error!(SyntaxError; "INTEGER TOO LARGE")),
        }
    }

    fn ident(&mut self) -> Result<Rc<str>> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.as_str().into()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<u32> {
        match self.next() {
            Some(Token::Literal(s)) => match s.parse::<u32>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(SyntaxError; "INVALID LINE NUMBER")),
            },
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn relation(&mut self) -> Result<Relation> {
        match self.next() {
            Some(Token::Operator(Operator::Less)) => Ok(Relation::Less),
            Some(Token::Operator(Operator::Equal)) => Ok(Relation::Equal),
            Some(Token::Operator(Operator::Greater)) => Ok(Relation::Greater),
            _ => Err(error!(SyntaxError; "EXPECTED RELATIONAL OPERATOR")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        use Word::*;
        match word {
            Let => Self::r#let(parse),
            Print => Self::r#print(parse),
            Input => Self::r#input(parse),
            Rem => Self::r#rem(parse),
            Goto => Self::r#goto(parse),
            If => Self::r#if(parse),
            End => Ok(Statement::End),
            Then | Run | List | Clear | Quit => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(ident, expr))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Print(parse.expression()?))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Input(parse.ident()?))
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        let mut text = String::new();
        while let Some(t) = parse.token_stream.next() {
            text.push_str(&t.to_string());
        }
        Ok(Statement::Rem(text))
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Goto(parse.line_number()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.expression()?;
        let relation = parse.relation()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let target = parse.line_number()?;
        Ok(Statement::If(lhs, relation, rhs, target))
    }
}
