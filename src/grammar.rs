//! The shift-reduce action/goto table.
//!
//! One 38×18 table covers both halves of the automaton: columns 0–8 are the
//! grammar's non-terminals (consulted as the goto table after a reduction),
//! columns 9–17 the terminals, indexed by
//! [`TokenKind::column`](crate::token::TokenKind). Production 0 is the goal:
//! reducing it with the stack empty and end-of-input as lookahead is the one
//! way a document completes.

/// A single table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// No transition; for a terminal column this is a syntax error.
    Err,
    /// Push the symbol and enter this state.
    Shift(u8),
    /// Pop `pops` symbols and goto on non-terminal `production`.
    Reduce { production: u8, pops: u8 },
}

/// The goal production.
pub(crate) const GOAL: u8 = 0;

use Action::Err as E;

const fn s(next: u8) -> Action {
    Action::Shift(next)
}

const fn r(production: u8, pops: u8) -> Action {
    Action::Reduce { production, pops }
}

/// Rows are automaton states. Terminal columns, left to right: `{` `}` `[`
/// `]` `,` string `:` bareword end.
#[rustfmt::skip]
pub(crate) static ACTIONS: [[Action; 18]; 38] = [
    //  nt0    nt1    nt2    nt3    nt4    nt5    nt6    nt7    nt8     {      }      [      ]      ,     str     :     bare    end
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,    s(1),   E,   s(19),   E,     E,     E,     E,     E,     E   ], //  0
    [   E,   s(12), s(14),   E,   s(15),   E,     E,     E,     E,     E,   r(1,0),  E,     E,     E,    s(2),   E,     E,     E   ], //  1
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,    s(3),   E,     E   ], //  2
    [ s(20),   E,     E,     E,     E,   s(21),   E,     E,     E,   s(10),   E,    s(6),   E,     E,    s(5),   E,    s(4),   E   ], //  3
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(5,1),  E,     E,   r(5,1),  E,     E,     E,     E   ], //  4
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(5,1),  E,     E,   r(5,1),  E,     E,     E,     E   ], //  5
    [ s(26),   E,     E,     E,     E,   s(27), s(22), s(24),   E,   s(11),   E,    s(9), r(6,0),  E,    s(8),   E,    s(7),   E   ], //  6
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(5,1), r(5,1),  E,     E,     E,     E   ], //  7
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(5,1), r(5,1),  E,     E,     E,     E   ], //  8
    [ s(26),   E,     E,     E,     E,   s(27), s(35), s(24),   E,   s(11),   E,    s(9), r(6,0),  E,    s(8),   E,    s(7),   E   ], //  9
    [   E,   s(31), s(14),   E,   s(15),   E,     E,     E,     E,     E,   r(1,0),  E,     E,     E,    s(2),   E,     E,     E   ], // 10
    [   E,   s(33), s(14),   E,   s(15),   E,     E,     E,     E,     E,   r(1,0),  E,     E,     E,    s(2),   E,     E,     E   ], // 11
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   s(13),   E,     E,     E,     E,     E,     E,     E   ], // 12
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(0,3) ], // 13
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(1,1),  E,     E,     E,     E,     E,     E,     E   ], // 14
    [   E,     E,     E,   s(17),   E,     E,     E,     E,     E,     E,   r(3,0),  E,     E,   s(16),   E,     E,     E,     E   ], // 15
    [   E,     E,   s(18),   E,   s(15),   E,     E,     E,     E,     E,     E,     E,     E,     E,    s(2),   E,     E,     E   ], // 16
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(2,2),  E,     E,     E,     E,     E,     E,     E   ], // 17
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(3,2),  E,     E,     E,     E,     E,     E,     E   ], // 18
    [ s(26),   E,     E,     E,     E,   s(27), s(25), s(24),   E,   s(11),   E,    s(9), r(6,0),  E,    s(8),   E,    s(7),   E   ], // 19
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(5,1),  E,     E,   r(5,1),  E,     E,     E,     E   ], // 20
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(4,3),  E,     E,   r(4,3),  E,     E,     E,     E   ], // 21
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   s(23),   E,     E,     E,     E,     E   ], // 22
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(0,3),  E,     E,   r(0,3),  E,     E,     E,     E   ], // 23
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(6,1),  E,     E,     E,     E,     E   ], // 24
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   s(37),   E,     E,     E,     E,     E   ], // 25
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(5,1), r(5,1),  E,     E,     E,     E   ], // 26
    [   E,     E,     E,     E,     E,     E,     E,     E,   s(28),   E,     E,     E,   r(8,0), s(29),  E,     E,     E,     E   ], // 27
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(7,2),  E,     E,     E,     E,     E   ], // 28
    [ s(26),   E,     E,     E,     E,   s(27),   E,   s(30),   E,   s(11),   E,    s(9),   E,     E,    s(8),   E,    s(7),   E   ], // 29
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(8,2),  E,     E,     E,     E,     E   ], // 30
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   s(32),   E,     E,     E,     E,     E,     E,     E   ], // 31
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(0,3),  E,     E,   r(0,3),  E,     E,     E,     E   ], // 32
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   s(34),   E,     E,     E,     E,     E,     E,     E   ], // 33
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(0,3), r(0,3),  E,     E,     E,     E   ], // 34
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   s(36),   E,     E,     E,     E,     E   ], // 35
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(0,3), r(0,3),  E,     E,     E,     E   ], // 36
    [   E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,     E,   r(0,3) ], // 37
];
