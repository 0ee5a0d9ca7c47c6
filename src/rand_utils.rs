use crate::general_error::Error;
use crate::rand_error::{to_err, RandError};
use rand::RngCore;

pub fn fill_random_bytes<R : RngCore>(rng   : &mut R,
                                      bytes : &mut [u8]) -> Result<(), Error> {
    match rng.try_fill_bytes(bytes) {
        Ok(())  => Ok(()),
        Err(e)  => Err(to_err(RandError::from(e))),
    }
}
