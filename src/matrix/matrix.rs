pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn swap_rows(&mut self, i: usize, j: usize);
    fn is_ref(&self) -> bool;
    fn is_rref(&self) -> bool;
    fn at(&self, row: usize, col: usize) -> T;
}
