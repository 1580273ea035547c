/// Builds a [crate::token::Token] (or a pattern matching one) from its source
/// text.
///
/// Contextual keywords such as `"of"` are plain identifiers and can only be
/// used in expression position.
macro_rules! tok {
    ('`') => {
        crate::token::Token::BackQuote
    };
    ('&') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::BitAnd)
    };
    ("&&") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::LogicalAnd)
    };
    ('^') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::BitXor)
    };
    ('|') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::BitOr)
    };
    ("||") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::LogicalOr)
    };
    ('+') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Add)
    };
    ('-') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Sub)
    };
    ('*') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Mul)
    };
    ("**") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Exp)
    };
    ('/') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Div)
    };
    ('%') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Mod)
    };
    ('<') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Lt)
    };
    ('>') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Gt)
    };
    ('!') => {
        crate::token::Token::Bang
    };
    ('~') => {
        crate::token::Token::Tilde
    };
    ('?') => {
        crate::token::Token::QuestionMark
    };
    ('=') => {
        crate::token::Token::AssignOp(crate::token::AssignOpToken::Assign)
    };
    ("=>") => {
        crate::token::Token::Arrow
    };
    ("...") => {
        crate::token::Token::DotDotDot
    };
    ('.') => {
        crate::token::Token::Dot
    };
    ('(') => {
        crate::token::Token::LParen
    };
    (')') => {
        crate::token::Token::RParen
    };
    ('[') => {
        crate::token::Token::LBracket
    };
    (']') => {
        crate::token::Token::RBracket
    };
    ('{') => {
        crate::token::Token::LBrace
    };
    ('}') => {
        crate::token::Token::RBrace
    };
    (';') => {
        crate::token::Token::Semi
    };
    (',') => {
        crate::token::Token::Comma
    };
    (':') => {
        crate::token::Token::Colon
    };
    ("${") => {
        crate::token::Token::DollarLBrace
    };
    ("++") => {
        crate::token::Token::PlusPlus
    };
    ("--") => {
        crate::token::Token::MinusMinus
    };

    ("null") => {
        crate::token::Token::Word(crate::token::Word::Null)
    };
    ("true") => {
        crate::token::Token::Word(crate::token::Word::True)
    };
    ("false") => {
        crate::token::Token::Word(crate::token::Word::False)
    };

    ("await") => {
        tok!(@kw Await)
    };
    ("break") => {
        tok!(@kw Break)
    };
    ("case") => {
        tok!(@kw Case)
    };
    ("catch") => {
        tok!(@kw Catch)
    };
    ("class") => {
        tok!(@kw Class)
    };
    ("const") => {
        tok!(@kw Const)
    };
    ("continue") => {
        tok!(@kw Continue)
    };
    ("debugger") => {
        tok!(@kw Debugger)
    };
    ("default") => {
        tok!(@kw Default_)
    };
    ("delete") => {
        tok!(@kw Delete)
    };
    ("do") => {
        tok!(@kw Do)
    };
    ("else") => {
        tok!(@kw Else)
    };
    ("export") => {
        tok!(@kw Export)
    };
    ("extends") => {
        tok!(@kw Extends)
    };
    ("finally") => {
        tok!(@kw Finally)
    };
    ("for") => {
        tok!(@kw For)
    };
    ("function") => {
        tok!(@kw Function)
    };
    ("if") => {
        tok!(@kw If)
    };
    ("import") => {
        tok!(@kw Import)
    };
    ("in") => {
        tok!(@kw In)
    };
    ("instanceof") => {
        tok!(@kw InstanceOf)
    };
    ("let") => {
        tok!(@kw Let)
    };
    ("new") => {
        tok!(@kw New)
    };
    ("return") => {
        tok!(@kw Return)
    };
    ("super") => {
        tok!(@kw Super)
    };
    ("switch") => {
        tok!(@kw Switch)
    };
    ("this") => {
        tok!(@kw This)
    };
    ("throw") => {
        tok!(@kw Throw)
    };
    ("try") => {
        tok!(@kw Try)
    };
    ("typeof") => {
        tok!(@kw TypeOf)
    };
    ("var") => {
        tok!(@kw Var)
    };
    ("void") => {
        tok!(@kw Void)
    };
    ("while") => {
        tok!(@kw While)
    };
    ("with") => {
        tok!(@kw With)
    };
    ("yield") => {
        tok!(@kw Yield)
    };

    ("as") => {
        tok!(@contextual "as")
    };
    ("from") => {
        tok!(@contextual "from")
    };
    ("get") => {
        tok!(@contextual "get")
    };
    ("of") => {
        tok!(@contextual "of")
    };
    ("set") => {
        tok!(@contextual "set")
    };
    ("static") => {
        tok!(@contextual "static")
    };
    ("target") => {
        tok!(@contextual "target")
    };

    (@kw $k:ident) => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::$k))
    };
    (@contextual $w:literal) => {
        crate::token::Token::Word(crate::token::Word::Ident(ast::JsWord::from($w)))
    };
}

macro_rules! op {
    (unary,"-") => {
        ast::UnaryOp::Minus
    };
    (unary,"+") => {
        ast::UnaryOp::Plus
    };
    ("!") => {
        ast::UnaryOp::Bang
    };
    ("~") => {
        ast::UnaryOp::Tilde
    };
    ("typeof") => {
        ast::UnaryOp::TypeOf
    };
    ("void") => {
        ast::UnaryOp::Void
    };
    ("delete") => {
        ast::UnaryOp::Delete
    };

    ("++") => {
        ast::UpdateOp::PlusPlus
    };
    ("--") => {
        ast::UpdateOp::MinusMinus
    };

    ("in") => {
        ast::BinaryOp::In
    };
    ("instanceof") => {
        ast::BinaryOp::InstanceOf
    };
    ("**") => {
        ast::BinaryOp::Exp
    };

    ('=') => {
        ast::AssignOp::Assign
    };
}
