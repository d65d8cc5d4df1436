//! Native implementations for the unicode module.
//!
//! Every function takes a code point argument, given either as an int or as
//! a string whose first character is used.

use ucd_core::{Ucd, UnicodeTable};

use crate::native::{NativeCtx, NativeError, NativeRegistry, NativeResult};

type SharedUcd = Ucd<&'static UnicodeTable>;

pub fn register(registry: &mut NativeRegistry) {
    // Properties
    registry.register("unicode.name", native_name);
    registry.register("unicode.category", native_category);
    registry.register("unicode.bidirectional", native_bidirectional);
    registry.register("unicode.combining", native_combining);
    registry.register("unicode.mirrored", native_mirrored);

    // Encoding
    registry.register("unicode.create", native_create);

    // Classification
    registry.register("unicode.iscategory", native_is_category);
    registry.register("unicode.isSeparator", native_is_separator);
    registry.register("unicode.isControl", native_is_control);
    registry.register("unicode.isLetter", native_is_letter);
    registry.register("unicode.isNumber", native_is_number);
    registry.register("unicode.isSymbolMathematical", native_is_symbol_mathematical);
}

fn run(
    ctx: &mut NativeCtx,
    f: impl FnOnce(&mut NativeCtx, &SharedUcd) -> Result<usize, NativeError>,
) -> NativeResult {
    match f(ctx, &Ucd::shared()) {
        Ok(n) => NativeResult::Ok(n),
        Err(e) => e.into(),
    }
}

/// Shared shape of the one-argument boolean predicates.
fn predicate(ctx: &mut NativeCtx, test: fn(&SharedUcd, i64) -> ucd_core::UcdResult<bool>) -> NativeResult {
    run(ctx, |ctx, ucd| {
        ctx.check_arity(1)?;
        let cp = ctx.arg_code_point(0)?;
        ctx.ret_bool(0, test(ucd, cp)?);
        Ok(1)
    })
}

fn native_name(ctx: &mut NativeCtx) -> NativeResult {
    run(ctx, |ctx, ucd| {
        ctx.check_arity(1)?;
        let cp = ctx.arg_code_point(0)?;
        let name = ucd.name(cp)?;
        ctx.ret_string(0, &name);
        Ok(1)
    })
}

fn native_category(ctx: &mut NativeCtx) -> NativeResult {
    run(ctx, |ctx, ucd| {
        ctx.check_arity(1)?;
        let cp = ctx.arg_code_point(0)?;
        ctx.ret_string(0, ucd.category(cp)?);
        Ok(1)
    })
}

fn native_bidirectional(ctx: &mut NativeCtx) -> NativeResult {
    run(ctx, |ctx, ucd| {
        ctx.check_arity(1)?;
        let cp = ctx.arg_code_point(0)?;
        ctx.ret_string(0, ucd.bidirectional(cp)?);
        Ok(1)
    })
}

fn native_combining(ctx: &mut NativeCtx) -> NativeResult {
    run(ctx, |ctx, ucd| {
        ctx.check_arity(1)?;
        let cp = ctx.arg_code_point(0)?;
        ctx.ret_f64(0, ucd.combining(cp)?);
        Ok(1)
    })
}

fn native_mirrored(ctx: &mut NativeCtx) -> NativeResult {
    predicate(ctx, SharedUcd::mirrored)
}

fn native_create(ctx: &mut NativeCtx) -> NativeResult {
    run(ctx, |ctx, _| {
        ctx.check_arity(1)?;
        let cp = ctx.arg_code_point(0)?;
        let encoded = ucd_core::encode(cp)?;
        ctx.ret_string(0, encoded.as_str());
        Ok(1)
    })
}

fn native_is_category(ctx: &mut NativeCtx) -> NativeResult {
    run(ctx, |ctx, ucd| {
        ctx.check_arity(2)?;
        let cp = ctx.arg_code_point(0)?;
        let matcher = ctx.arg_str(1)?;
        ctx.ret_bool(0, ucd.is_category(cp, matcher)?);
        Ok(1)
    })
}

fn native_is_separator(ctx: &mut NativeCtx) -> NativeResult {
    predicate(ctx, SharedUcd::is_separator)
}

fn native_is_control(ctx: &mut NativeCtx) -> NativeResult {
    predicate(ctx, SharedUcd::is_control)
}

fn native_is_letter(ctx: &mut NativeCtx) -> NativeResult {
    predicate(ctx, SharedUcd::is_letter)
}

fn native_is_number(ctx: &mut NativeCtx) -> NativeResult {
    predicate(ctx, SharedUcd::is_number)
}

fn native_is_symbol_mathematical(ctx: &mut NativeCtx) -> NativeResult {
    predicate(ctx, SharedUcd::is_symbol_mathematical)
}
