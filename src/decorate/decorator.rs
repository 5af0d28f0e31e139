use std::io::{self, Write};

/// Something that can be called with no arguments.
///
/// Every `FnMut() -> R` closure is an `Invoke`; [`Decorated`] is one too, so
/// decorators stack.
pub trait Invoke {
    type Output;

    fn invoke(&mut self) -> Self::Output;
}

impl<F, R> Invoke for F
where
    F: FnMut() -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&mut self) -> R {
        self()
    }
}

/// Runs `setup` before every call to `inner`, then returns `inner`'s result.
pub struct Decorated<S, F> {
    setup: S,
    inner: F,
}

impl<S, F> Decorated<S, F>
where
    S: FnMut(),
    F: Invoke,
{
    pub fn new(setup: S, inner: F) -> Self {
        Self { setup, inner }
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<S, F> Invoke for Decorated<S, F>
where
    S: FnMut(),
    F: Invoke,
{
    type Output = F::Output;

    fn invoke(&mut self) -> F::Output {
        (self.setup)();
        self.inner.invoke()
    }
}

/// Closure form of [`Decorated`].
pub fn decorate<S, F, R>(mut setup: S, mut f: F) -> impl FnMut() -> R
where
    S: FnMut(),
    F: FnMut() -> R,
{
    move || {
        setup();
        f()
    }
}

/// Says `please` on `out` before each call. A failed write is returned and
/// the wrapped call is skipped.
pub fn polite<'a, W, F>(out: &'a mut W, mut f: F) -> impl FnMut() -> io::Result<F::Output> + 'a
where
    W: Write,
    F: Invoke + 'a,
{
    move || {
        writeln!(out, "please")?;
        Ok(f.invoke())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn setup_runs_before_each_call() {
        let log = RefCell::new(Vec::new());
        let mut f = decorate(
            || log.borrow_mut().push("setup"),
            || {
                log.borrow_mut().push("call");
                7
            },
        );
        assert_eq!(f(), 7);
        assert_eq!(f(), 7);
        assert_eq!(*log.borrow(), vec!["setup", "call", "setup", "call"]);
    }

    #[test]
    fn decorated_struct_delegates_output() {
        let mut setups = 0;
        let mut counter = 0;
        {
            let mut d = Decorated::new(
                || setups += 1,
                || {
                    counter += 1;
                    counter * 10
                },
            );
            assert_eq!(d.invoke(), 10);
            assert_eq!(d.invoke(), 20);
        }
        assert_eq!(setups, 2);
        assert_eq!(counter, 2);
    }

    #[test]
    fn decorators_stack_outermost_first() {
        let log = RefCell::new(String::new());
        let inner = Decorated::new(|| log.borrow_mut().push('b'), || log.borrow_mut().push('c'));
        let mut outer = Decorated::new(|| log.borrow_mut().push('a'), inner);
        outer.invoke();
        assert_eq!(*log.borrow(), "abc");
    }

    #[test]
    fn polite_says_please_first() {
        let mut out = Vec::new();
        let said = RefCell::new(Vec::new());
        {
            let mut come_back = polite(&mut out, || said.borrow_mut().push("Come back!"));
            come_back.invoke().unwrap();
            come_back.invoke().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "please\nplease\n");
        assert_eq!(*said.borrow(), vec!["Come back!", "Come back!"]);
    }

    #[test]
    fn polite_surfaces_write_errors() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut out = Closed;
        let mut calls = 0;
        {
            let mut f = polite(&mut out, || calls += 1);
            let err = f.invoke().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn polite_stacks_with_decorated() {
        let mut out = Vec::new();
        let log = RefCell::new(Vec::new());
        {
            let inner = Decorated::new(|| log.borrow_mut().push("inner setup"), || 3);
            let mut f = polite(&mut out, inner);
            assert_eq!(f.invoke().unwrap(), 3);
        }
        assert_eq!(String::from_utf8(out).unwrap(), "please\n");
        assert_eq!(*log.borrow(), vec!["inner setup"]);
    }
}
