/// A boolean lifted to the type level.
pub trait Bool {
    const VALUE: bool;

    type Not: Bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
}

pub type Not<B> = <B as Bool>::Not;

pub trait And<B: Bool>: Bool {
    type Output: Bool;
}

pub trait Or<B: Bool>: Bool {
    type Output: Bool;
}

impl<B: Bool> And<B> for True {
    type Output = B;
}
impl<B: Bool> And<B> for False {
    type Output = False;
}

impl<B: Bool> Or<B> for True {
    type Output = True;
}
impl<B: Bool> Or<B> for False {
    type Output = B;
}
