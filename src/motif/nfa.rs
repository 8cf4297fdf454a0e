//! Thompson automaton built from a parsed motif.
//!
//! The automaton works over bytes. Input sequences are validated to be ASCII,
//! so Unicode classes are clipped to the ASCII range.

use regex_syntax::hir::{Class, Hir, HirKind, Look};

use crate::motif::MotifError;
use crate::utils::validation::MAX_PATTERN_STATES;

pub type StateId = usize;

/// Set of bytes accepted by a single transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteClass([u64; 4]);

impl ByteClass {
    #[must_use]
    pub fn single(byte: u8) -> Self {
        let mut class = Self::default();
        class.insert_range(byte, byte);
        class
    }

    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for b in lo..=hi {
            self.0[usize::from(b >> 6)] |= 1 << (b & 63);
        }
    }

    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.0[usize::from(byte >> 6)] & (1 << (byte & 63)) != 0
    }
}

/// Zero-width position test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

impl Anchor {
    #[must_use]
    pub fn holds(self, pos: usize, len: usize) -> bool {
        match self {
            Self::Start => pos == 0,
            Self::End => pos == len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Consume one byte, then continue at `next`
    Byte { class: ByteClass, next: StateId },
    /// Free transitions to each target, most preferred first
    Split(Vec<StateId>),
    /// Free transition taken only where the anchor holds
    Assert { anchor: Anchor, next: StateId },
    Match,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    /// Build an automaton for a parsed motif.
    ///
    /// # Errors
    ///
    /// Returns `MotifError::InvalidMotif` for constructs the matcher cannot
    /// express (word boundaries, line anchors are treated as text anchors),
    /// or `MotifError::TooComplex` if the automaton grows past
    /// `MAX_PATTERN_STATES`.
    pub fn build(hir: &Hir) -> Result<Self, MotifError> {
        let mut builder = Builder { states: Vec::new() };
        let accept = builder.push(State::Match)?;
        let start = builder.compile(hir, accept)?;
        Ok(Self {
            states: builder.states,
            start,
        })
    }

    #[must_use]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Compiles right to left: every fragment is built knowing its continuation.
struct Builder {
    states: Vec<State>,
}

impl Builder {
    fn push(&mut self, state: State) -> Result<StateId, MotifError> {
        if self.states.len() >= MAX_PATTERN_STATES {
            return Err(MotifError::TooComplex(MAX_PATTERN_STATES));
        }
        self.states.push(state);
        Ok(self.states.len() - 1)
    }

    fn compile(&mut self, hir: &Hir, next: StateId) -> Result<StateId, MotifError> {
        match hir.kind() {
            HirKind::Empty => Ok(next),
            HirKind::Literal(literal) => {
                let mut next = next;
                for &byte in literal.0.iter().rev() {
                    next = self.push(State::Byte {
                        class: ByteClass::single(byte),
                        next,
                    })?;
                }
                Ok(next)
            }
            HirKind::Class(class) => {
                let class = byte_class(class);
                self.push(State::Byte { class, next })
            }
            HirKind::Look(look) => {
                let anchor = match look {
                    Look::Start | Look::StartLF | Look::StartCRLF => Anchor::Start,
                    Look::End | Look::EndLF | Look::EndCRLF => Anchor::End,
                    other => {
                        return Err(MotifError::InvalidMotif(format!(
                            "unsupported assertion {other:?}"
                        )))
                    }
                };
                self.push(State::Assert { anchor, next })
            }
            HirKind::Capture(capture) => self.compile(&capture.sub, next),
            HirKind::Concat(subs) => {
                let mut next = next;
                for sub in subs.iter().rev() {
                    next = self.compile(sub, next)?;
                }
                Ok(next)
            }
            HirKind::Alternation(subs) => {
                let mut entries = Vec::with_capacity(subs.len());
                for sub in subs {
                    entries.push(self.compile(sub, next)?);
                }
                self.push(State::Split(entries))
            }
            HirKind::Repetition(rep) => {
                // Greedy repetition prefers another pass through the body
                let order = |body: StateId, exit: StateId| {
                    if rep.greedy {
                        vec![body, exit]
                    } else {
                        vec![exit, body]
                    }
                };
                let mut next = next;
                match rep.max {
                    Some(max) => {
                        for _ in rep.min..max {
                            let body = self.compile(&rep.sub, next)?;
                            next = self.push(State::Split(order(body, next)))?;
                        }
                    }
                    None => {
                        let head = self.push(State::Split(Vec::new()))?;
                        let body = self.compile(&rep.sub, head)?;
                        self.states[head] = State::Split(order(body, next));
                        next = head;
                    }
                }
                for _ in 0..rep.min {
                    next = self.compile(&rep.sub, next)?;
                }
                Ok(next)
            }
        }
    }
}

fn byte_class(class: &Class) -> ByteClass {
    let mut out = ByteClass::default();
    match class {
        Class::Unicode(unicode) => {
            for range in unicode.ranges() {
                let lo = u32::from(range.start());
                let hi = u32::from(range.end()).min(0x7F);
                if let (Ok(lo), Ok(hi)) = (u8::try_from(lo), u8::try_from(hi)) {
                    if lo <= hi {
                        out.insert_range(lo, hi);
                    }
                }
            }
        }
        Class::Bytes(bytes) => {
            for range in bytes.ranges() {
                out.insert_range(range.start(), range.end());
            }
        }
    }
    out
}
