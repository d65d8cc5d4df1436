//! Native function interface.
//!
//! A native function receives a `NativeCtx` holding its arguments, writes its
//! results into return slots, and reports how many slots it filled.

use std::fmt;

use hashbrown::HashMap;
use thiserror::Error;
use ucd_core::UcdError;

/// A host value crossing the native boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    #[error("unknown native function: {0}")]
    UnknownMethod(String),

    #[error("expected {expected} argument(s), got {got}")]
    ArgCount { expected: usize, got: usize },

    #[error("argument {index}: expected {expected}, got {got}")]
    ArgType {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("argument {index}: empty string has no code point")]
    EmptyString { index: usize },

    #[error("native panic: {0}")]
    Panic(String),

    #[error(transparent)]
    Ucd(#[from] UcdError),
}

/// Outcome of a native call.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeResult {
    /// Number of return slots written.
    Ok(usize),
    Panic(String),
}

impl From<NativeError> for NativeResult {
    fn from(e: NativeError) -> Self {
        NativeResult::Panic(e.to_string())
    }
}

pub type NativeFn = fn(&mut NativeCtx) -> NativeResult;

pub struct NativeCtx<'a> {
    args: &'a [Value],
    rets: Vec<Value>,
}

impl<'a> NativeCtx<'a> {
    pub fn new(args: &'a [Value]) -> Self {
        Self { args, rets: Vec::new() }
    }

    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn check_arity(&self, expected: usize) -> Result<(), NativeError> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(NativeError::ArgCount { expected, got: self.args.len() })
        }
    }

    pub fn arg(&self, index: usize) -> Result<&'a Value, NativeError> {
        self.args.get(index).ok_or(NativeError::ArgCount {
            expected: index + 1,
            got: self.args.len(),
        })
    }

    pub fn arg_str(&self, index: usize) -> Result<&'a str, NativeError> {
        match self.arg(index)? {
            Value::Str(s) => Ok(s.as_str()),
            other => Err(NativeError::ArgType {
                index,
                expected: "string",
                got: other.type_name(),
            }),
        }
    }

    /// Reduce an argument to a code point: integers pass through, strings
    /// give the ordinal of their first character.
    pub fn arg_code_point(&self, index: usize) -> Result<i64, NativeError> {
        match self.arg(index)? {
            Value::Int(i) => Ok(*i),
            Value::Str(s) => s
                .chars()
                .next()
                .map(|c| c as i64)
                .ok_or(NativeError::EmptyString { index }),
            other => Err(NativeError::ArgType {
                index,
                expected: "int or string",
                got: other.type_name(),
            }),
        }
    }

    pub fn ret_value(&mut self, index: usize, value: Value) {
        if self.rets.len() <= index {
            self.rets.resize(index + 1, Value::Nil);
        }
        self.rets[index] = value;
    }

    #[inline]
    pub fn ret_bool(&mut self, index: usize, b: bool) {
        self.ret_value(index, Value::Bool(b));
    }

    #[inline]
    pub fn ret_i64(&mut self, index: usize, i: i64) {
        self.ret_value(index, Value::Int(i));
    }

    #[inline]
    pub fn ret_f64(&mut self, index: usize, x: f64) {
        self.ret_value(index, Value::Float(x));
    }

    #[inline]
    pub fn ret_string(&mut self, index: usize, s: &str) {
        self.ret_value(index, Value::Str(s.to_string()));
    }

    pub fn into_rets(self) -> Vec<Value> {
        self.rets
    }
}

/// Name-to-function table for native functions.
#[derive(Default)]
pub struct NativeRegistry {
    funcs: HashMap<String, NativeFn>,
}

impl NativeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, func: NativeFn) {
        if self.funcs.insert(name.to_string(), func).is_some() {
            log::warn!("native function {} registered twice, keeping the last", name);
        } else {
            log::debug!("registered native function {}", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<NativeFn> {
        self.funcs.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Vec<Value>, NativeError> {
        let func = self
            .get(name)
            .ok_or_else(|| NativeError::UnknownMethod(name.to_string()))?;
        let mut ctx = NativeCtx::new(args);
        match func(&mut ctx) {
            NativeResult::Ok(n) => {
                let mut rets = ctx.into_rets();
                rets.truncate(n);
                Ok(rets)
            }
            NativeResult::Panic(msg) => Err(NativeError::Panic(msg)),
        }
    }
}
