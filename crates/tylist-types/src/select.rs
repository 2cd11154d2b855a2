use crate::logic::{Bool, False, True};

/// Chooses between `Then` and `Else` depending on the type-level condition it is implemented
/// for.
///
/// Both the choice of a type ([`Select`]) and the choice of a value ([`If::select`]) are
/// available. Both candidates are always provided: there is nothing to evaluate lazily once the
/// types are known.
pub trait If<Then, Else>: Bool {
    type Output;

    fn select(then: Then, otherwise: Else) -> Self::Output;
}

impl<Then, Else> If<Then, Else> for True {
    type Output = Then;

    fn select(then: Then, _otherwise: Else) -> Self::Output {
        then
    }
}

impl<Then, Else> If<Then, Else> for False {
    type Output = Else;

    fn select(_then: Then, otherwise: Else) -> Self::Output {
        otherwise
    }
}

pub type Select<Cond, Then, Else> = <Cond as If<Then, Else>>::Output;

/// Value counterpart of [`Select`], usable in `const` items.
pub const fn select<T: Copy>(cond: bool, then: T, otherwise: T) -> T {
    if cond {
        then
    } else {
        otherwise
    }
}

crate::assert_type_eq!(Select<True, i32, ()>, i32);
crate::assert_type_eq!(Select<False, i32, ()>, ());
crate::const_assert!(select(1 < 10, 1, 2) == 1);
crate::const_assert!(select(10 < 1, 1, 2) == 2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_by_type() {
        assert_eq!(<True as If<&str, u8>>::select("then", 0), "then");
        assert_eq!(<False as If<&str, u8>>::select("then", 7), 7);
    }

    #[test]
    fn select_values_by_bool() {
        assert_eq!(select(true, 'a', 'b'), 'a');
        assert_eq!(select(false, 'a', 'b'), 'b');
    }
}
