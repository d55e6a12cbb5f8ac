/**
Adapts an iterator of `Result`s into an iterator of the `Ok` values.

Iteration ends at the first `Err`, which is parked in the trap.  Inspect the trap once the adapter has been consumed.
*/
pub trait TrapErrExt<T, E>: Sized + Iterator<Item=Result<T, E>> {
    fn trap_err(self, trap: &mut Result<(), E>) -> TrapErrIter<'_, Self, E> {
        TrapErrIter {
            iter: Some(self),
            trap: trap,
        }
    }
}

impl<It, T, E> TrapErrExt<T, E> for It where It: Iterator<Item=Result<T, E>> {}

pub struct TrapErrIter<'a, It, E> {
    iter: Option<It>,
    trap: &'a mut Result<(), E>,
}

impl<'a, It, T, E> Iterator for TrapErrIter<'a, It, E>
where
    It: Iterator<Item=Result<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.as_mut().and_then(Iterator::next) {
            Some(Ok(v)) => Some(v),
            Some(Err(err)) => {
                self.iter = None;
                *self.trap = Err(err);
                None
            },
            None => {
                self.iter = None;
                None
            },
        }
    }
}
