//! Type-dispatched printing.
//!
//! Every printable kind implements [`Print`] with a fixed format:
//!
//! | Kind | Output |
//! |------|--------|
//! | `bool` | `true` / `false` |
//! | integers | decimal |
//! | `f32`, `f64` | fixed notation, six fractional digits (`2.500000`) |
//! | text | verbatim bytes |
//!
//! Argument lists are `&[&dyn Print]`; [`print_all`] writes them in order
//! and nothing else, [`println_all`] adds a trailing newline. The
//! [`gx_print!`](crate::gx_print) and [`gx_println!`](crate::gx_println)
//! macros build the list and target standard output.

use std::io::{self, Write};

use crate::error::ContractViolation;

/// A value with a fixed gx text representation.
pub trait Print {
    /// Write this value's representation to `out`.
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: Print + ?Sized> Print for &T {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).print_to(out)
    }
}

impl Print for bool {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(if *self { b"true" } else { b"false" })
    }
}

macro_rules! print_decimal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Print for $ty {
                fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

print_decimal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn print_float(value: f64, out: &mut dyn Write) -> io::Result<()> {
    if value.is_nan() {
        return out.write_all(b"nan");
    }
    write!(out, "{value:.6}")
}

impl Print for f32 {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        print_float(f64::from(*self), out)
    }
}

impl Print for f64 {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        print_float(*self, out)
    }
}

impl Print for str {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl Print for String {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl Print for char {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut buf = [0u8; 4];
        out.write_all(self.encode_utf8(&mut buf).as_bytes())
    }
}

impl Print for ContractViolation {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{self}")
    }
}

/// Write every argument to `out`, in order, with nothing in between.
pub fn print_all(out: &mut dyn Write, args: &[&dyn Print]) -> io::Result<()> {
    for arg in args {
        arg.print_to(out)?;
    }
    Ok(())
}

/// Like [`print_all`], followed by a newline.
pub fn println_all(out: &mut dyn Write, args: &[&dyn Print]) -> io::Result<()> {
    print_all(out, args)?;
    out.write_all(b"\n")
}

/// Print `args` to standard output.
///
/// # Panics
///
/// Panics if writing to standard output fails, like `std::print!`.
pub fn print_args(args: &[&dyn Print]) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = print_all(&mut lock, args) {
        panic!("failed printing to stdout: {e}");
    }
}

/// Print `args` and a newline to standard output.
///
/// # Panics
///
/// Panics if writing to standard output fails, like `std::println!`.
pub fn println_args(args: &[&dyn Print]) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = println_all(&mut lock, args) {
        panic!("failed printing to stdout: {e}");
    }
}

/// Print any number of [`Print`] values to standard output.
///
/// ```
/// gx_core::gx_print!("x = ", 3, ", ok = ", true);
/// ```
#[macro_export]
macro_rules! gx_print {
    ($($arg:expr),* $(,)?) => {
        $crate::print::print_args(&[$(&$arg as &dyn $crate::print::Print),*])
    };
}

/// Print any number of [`Print`] values followed by a newline.
///
/// ```
/// gx_core::gx_println!("area: ", 2.5f32);
/// ```
#[macro_export]
macro_rules! gx_println {
    ($($arg:expr),* $(,)?) => {
        $crate::print::println_args(&[$(&$arg as &dyn $crate::print::Print),*])
    };
}
