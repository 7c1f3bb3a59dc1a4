use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{Matrix, Vector};

#[repr(C)]
pub struct Rows2<T> {
    pub row0: Vector<T, 2>,
    pub row1: Vector<T, 2>,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct Rows3<T> {
    pub row0: Vector<T, 3>,
    pub row1: Vector<T, 3>,
    pub row2: Vector<T, 3>,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct Rows4<T> {
    pub row0: Vector<T, 4>,
    pub row1: Vector<T, 4>,
    pub row2: Vector<T, 4>,
    pub row3: Vector<T, 4>,
    _priv: (), // prevent external construction
}

impl<T> Deref for Matrix<T, 2> {
    type Target = Rows2<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Matrix<T, 2> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Matrix<T, 3> {
    type Target = Rows3<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Matrix<T, 3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Matrix<T, 4> {
    type Target = Rows4<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Matrix<T, 4> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
