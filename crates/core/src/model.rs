/// A callable model that maps an input to an output.
///
/// Implementations take `&self`, so a single model value can be shared
/// and called from several threads at once when it is `Sync`.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Blanket implementation so references to models are models too.
impl<M: Model + ?Sized> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{convert::Infallible, fmt};

    /// Model that doubles its input.
    struct Doubler;
    impl Model for Doubler {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(2.0 * input)
        }
    }

    #[derive(Debug, PartialEq)]
    struct Negative(f64);

    impl fmt::Display for Negative {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "negative input: {}", self.0)
        }
    }

    impl std::error::Error for Negative {}

    /// Model that takes the square root of non-negative inputs.
    struct Sqrt;
    impl Model for Sqrt {
        type Input = f64;
        type Output = f64;
        type Error = Negative;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            if *input < 0.0 {
                Err(Negative(*input))
            } else {
                Ok(input.sqrt())
            }
        }
    }

    fn call_generic<M: Model>(model: M, input: &M::Input) -> Result<M::Output, M::Error> {
        model.call(input)
    }

    #[test]
    fn references_are_models() {
        let model = Doubler;
        assert_eq!(call_generic(&model, &1.5), Ok(3.0));
        assert_eq!(call_generic(&&model, &-2.0), Ok(-4.0));
    }

    #[test]
    fn errors_pass_through_trait_objects() {
        let model: &dyn Model<Input = f64, Output = f64, Error = Negative> = &Sqrt;

        assert_eq!(call_generic(model, &9.0), Ok(3.0));
        assert_eq!(call_generic(model, &-1.0), Err(Negative(-1.0)));

        let err = model.call(&-4.0).unwrap_err();
        assert_eq!(err.to_string(), "negative input: -4");
    }
}
