use std::any::type_name;

use tylist::reify;
use tylist::seq::Seq;
use tylist::types::*;

/// Checks that every type-level operation on `$list` agrees with the same operation applied to
/// its reified sequence.
macro_rules! agrees_with_seq {
    ($list:ty, $x:ty) => {{
        let seq = reify::<$list>();
        let x = type_name::<$x>();

        assert_eq!(reify::<PushFrontT<$list, $x>>(), seq.push_front(x));
        assert_eq!(reify::<PushBackT<$list, $x>>(), seq.push_back(x));
        assert_eq!(reify::<PopFrontT<$list>>(), seq.pop_front());
        assert_eq!(reify::<PopBackT<$list>>(), seq.pop_back());

        assert_eq!(<$list as HList>::LEN, seq.len());
        assert_eq!(is_empty::<$list>(), seq.is_empty());

        match seq.front() {
            None => assert_eq!(type_name::<FrontT<$list>>(), type_name::<NoneType>()),
            Some(front) => assert_eq!(type_name::<FrontT<$list>>(), *front),
        }
        match seq.back() {
            None => assert_eq!(type_name::<BackT<$list>>(), type_name::<NoneType>()),
            Some(back) => assert_eq!(type_name::<BackT<$list>>(), *back),
        }
    }};
}

#[test]
fn type_lists_agree_with_sequences() {
    agrees_with_seq!(HList![], u8);
    agrees_with_seq!(HList![i32], u8);
    agrees_with_seq!(HList![bool, f64], i32);
    agrees_with_seq!(HList![bool, f64, i32], ());
    agrees_with_seq!(HList![u8, u8, u8, u8], u8);
    agrees_with_seq!(HList![String, Vec<u8>, Option<char>, (), [u8; 4]], &'static str);
}

#[test]
fn concrete_cases() {
    type L = HList![bool, f64];

    assert_eq!(reify::<L>(), Seq::from(vec!["bool", "f64"]));
    assert_eq!(reify::<BackT<HList![L]>>(), reify::<L>());
    assert_eq!(reify::<PopBackT<HList![i32]>>(), reify::<HList![]>());
    assert!(reify::<HList![]>().is_empty());
}
