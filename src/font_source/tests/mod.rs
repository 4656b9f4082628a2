mod affine_transform;
