use tylist::types::{assert_type_eq, BackT, HList, PopBackT, PushBackT, TypeNames};

type Sample = HList![bool, f64];

assert_type_eq!(BackT<Sample>, f64);
assert_type_eq!(PopBackT<Sample>, HList![bool]);
assert_type_eq!(PushBackT<Sample, i32>, HList![bool, f64, i32]);

fn main() {
    let _ = dotenv::dotenv();
    let _ = pretty_env_logger::try_init_timed();

    log::debug!(
        "{:?}: back = {}, pop_back = {:?}",
        Sample::type_names(),
        std::any::type_name::<BackT<Sample>>(),
        <PopBackT<Sample> as TypeNames>::type_names(),
    );
}
