use tylist_seq::Seq;
use tylist_types::TypeNames;

/// The names of the types in `L`, front to back.
///
/// ```
/// use tylist::types::{HList, PushBackT};
///
/// type L = HList![bool, f64];
///
/// assert_eq!(tylist::reify::<PushBackT<L, i32>>(), tylist::reify::<L>().push_back("i32"));
/// ```
pub fn reify<L: TypeNames>() -> Seq<&'static str> {
    L::type_names().into()
}
