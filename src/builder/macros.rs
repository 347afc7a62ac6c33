//! Macros for declaring static state tables.

/// Declare a `static` state table.
///
/// Each entry is `id => "Name"`, optionally followed by `, behavior` naming
/// a function or `static` implementing [`Behavior`](crate::core::Behavior).
/// Entries without a behavior never request a transition. The generated
/// item is a `&'static [&'static State<'static>]`, ready for
/// [`Fsm::new`](crate::core::Fsm::new).
///
/// # Example
///
/// ```
/// use tablefsm::core::{Fsm, Step};
/// use tablefsm::state_table;
///
/// fn red() -> i32 {
///     1
/// }
///
/// fn green() -> i32 {
///     2
/// }
///
/// fn yellow() -> i32 {
///     0
/// }
///
/// state_table! {
///     static LIGHTS = [
///         0 => "Red", red;
///         1 => "Green", green;
///         2 => "Yellow", yellow;
///     ];
/// }
///
/// let mut fsm = Fsm::new(LIGHTS);
/// assert_eq!(fsm.step(), Step::Transitioned { from: Some(0), to: 1 });
/// assert_eq!(fsm.current().unwrap().name(), "Green");
/// ```
#[macro_export]
macro_rules! state_table {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident = [
            $(
                $id:literal => $label:literal $(, $behavior:path)?
            );* $(;)?
        ];
    ) => {
        $(#[$meta])*
        $vis static $name: &[&$crate::core::State<'static>] = &[
            $(
                &$crate::core::State::new(
                    $id,
                    $label,
                    $crate::state_table!(@behavior $($behavior)?),
                )
            ),*
        ];
    };

    (@behavior) => {
        ::core::option::Option::None
    };

    (@behavior $behavior:path) => {
        ::core::option::Option::Some(&$behavior)
    };
}
