//! Re-exports of components and common types.

pub use crate::{
    class::Class,
    icon::SvgIcon,
    select::{Dropdown, DropdownList, DropdownOption, OptionValue, Selection},
};
