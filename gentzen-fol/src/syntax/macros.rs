/// Creates a [variable symbol](crate::syntax::Var).
#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::Var::from(stringify!($v))
    };
}

/// Creates a [function symbol](crate::syntax::Func).
#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::Func::from(stringify!($f))
    };
}

/// Creates a [constant symbol](crate::syntax::Const).
#[macro_export]
macro_rules! c {
    ($c:ident) => {
        $crate::syntax::Const::from(stringify!($c))
    };
}

/// Creates a [predicate symbol](crate::syntax::Pred).
#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::from(stringify!($p))
    };
}

/// Creates a [term](crate::syntax::Term): `x` is a variable, `@c` is a constant and
/// `f(x, @c)` is a function application.
#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::from($crate::v!($v))
    };
    (@$c:ident) => {
        $crate::syntax::Term::from($crate::c!($c))
    };
    ($func:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::f!($func).app(ts)
        }
    };
}

/// Creates a vector of comma separated [terms](crate::syntax::Term).
#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($v),))
    };
    (@acc (@$c:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!(@$c),))
    };
    (@acc ($func:ident ($($t:tt)*) $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        {
            let term = $crate::term!($func ($($t)*));
            $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* term,))
        }
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

/// Creates a first-order [formula](crate::syntax::Fof).
///
/// **Example**:
/// ```rust
/// # use gentzen_fol::fof;
/// let formula = fof!(!x . {(P(x)) -> (?y . [(f(x)) = (y)])});
/// assert_eq!("∀ x. ((¬P(x)) ∨ (∃ y. (f(x) = y)))", formula.to_string());
/// ```
#[macro_export]
macro_rules! fof {
    // Atom
    ($pred:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::pred!($pred).app(ts)
        }
    };
    // Equality
    (($($left:tt)*) = ($($right:tt)*)) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] = [$($right:tt)*]) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} = {$($right:tt)*}) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    // Negation
    (~($($fmla:tt)*)) => {
        $crate::fof!(@not ($($fmla)*))
    };
    (~[$($fmla:tt)*]) => {
        $crate::fof!(@not ($($fmla)*))
    };
    (~{$($fmla:tt)*}) => {
        $crate::fof!(@not ($($fmla)*))
    };
    // Conjunction
    (($($left:tt)*) & ($($right:tt)*)) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] & [$($right:tt)*]) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} & {$($right:tt)*}) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    // Disjunction
    (($($left:tt)*) | ($($right:tt)*)) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] | [$($right:tt)*]) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} | {$($right:tt)*}) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    // Implication
    (($($left:tt)*) -> ($($right:tt)*)) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] -> [$($right:tt)*]) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} -> {$($right:tt)*}) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    // Bi-implication
    (($($left:tt)*) <=> ($($right:tt)*)) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] <=> [$($right:tt)*]) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} <=> {$($right:tt)*}) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    // Universally Quantified
    (! $($v:ident),+ . ($($fmla:tt)*)) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    (! $($v:ident),+ . [$($fmla:tt)*]) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    (! $($v:ident),+ . {$($fmla:tt)*}) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    // Existentially Quantified
    (? $($v:ident),+ . ($($fmla:tt)*)) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    (? $($v:ident),+ . [$($fmla:tt)*]) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    (? $($v:ident),+ . {$($fmla:tt)*}) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    // Construction rules
    (@equals ($($left:tt)*) ($($right:tt)*)) => {
        {
            let left = $crate::term!($($left)*);
            let right = $crate::term!($($right)*);
            left.equals(right)
        }
    };
    (@not ($($fmla:tt)*)) => {
        $crate::syntax::Fof::not($crate::fof!($($fmla)*))
    };
    (@and ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).and($crate::fof!($($right)*))
    };
    (@or ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).or($crate::fof!($($right)*))
    };
    (@implies ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).implies($crate::fof!($($right)*))
    };
    (@iff ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).iff($crate::fof!($($right)*))
    };
    (@forall ($($v:ident),+) ($($fmla:tt)*)) => {
        {
            let vs = vec![$($crate::v!($v),)+];
            $crate::syntax::Fof::forall(vs, $crate::fof!($($fmla)*))
        }
    };
    (@exists ($($v:ident),+) ($($fmla:tt)*)) => {
        {
            let vs = vec![$($crate::v!($v),)+];
            $crate::syntax::Fof::exists(vs, $crate::fof!($($fmla)*))
        }
    };
}
