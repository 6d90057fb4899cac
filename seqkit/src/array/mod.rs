// The array utilities, grouped by what they do. Everything is re-exported
// flat from the crate root.

mod chunk;
mod construct;
mod nested;
mod partition;
mod predicate;
mod reduce;
mod search;
mod set;
mod slice;

pub use chunk::{chunk, every_nth};
pub use construct::{
    initialize_2d_array, initialize_array_with_range, initialize_array_with_range_right,
    initialize_array_with_values, range_to,
};
pub use nested::{deep_flatten, flatten, initialize_nd_array, Nested};
pub use partition::{
    bifurcate, bifurcate_by, count_by, filter_non_unique, filter_non_unique_by, group_by,
};
pub use predicate::{
    all, all_equal, all_truthy, any, any_truthy, compact, is_sorted, none, none_truthy,
    SortOrder,
};
pub use reduce::{longest_item, max_n, min_n};
pub use search::{count_occurrences, find_last, find_last_index, for_each_right, index_of_all};
pub use set::{
    difference, difference_by, difference_with, intersection, intersection_by, intersection_with,
};
pub use slice::{drop, drop_right, drop_right_while, drop_while, head, initial, last, nth_element};
