mod patch_laws;
